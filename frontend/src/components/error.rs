use crate::api::ApiError;
use leptos::*;

/// Error banner for a failed action; server validation lists are expanded.
#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2" role="alert">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().map(|e| match validation_errors(&e) {
                    Some(errors) => view! {
                        <ul class="list-disc list-inside text-sm">
                            {errors.into_iter().map(|err| view! { <li>{err}</li> }).collect_view()}
                        </ul>
                    }.into_view(),
                    None => ().into_view(),
                })}
            </div>
        </Show>
    }
}

fn validation_errors(error: &ApiError) -> Option<Vec<String>> {
    if error.code != "VALIDATION_ERROR" {
        return None;
    }
    let errors = error.details.as_ref()?.get("errors")?.as_array()?;
    let messages: Vec<String> = errors
        .iter()
        .filter_map(|err| err.as_str().map(str::to_string))
        .collect();
    (messages.len() > 1).then_some(messages)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn inline_error_renders_validation_details() {
        let html = render_to_string(move || {
            let error = ApiError {
                error: "email inválido; senha curta".into(),
                code: "VALIDATION_ERROR".into(),
                details: Some(json!({ "errors": ["email inválido", "senha curta"] })),
            };
            let signal = create_rw_signal(Some(error));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert_eq!(html.matches("<li").count(), 2);
        assert!(html.contains("senha curta"));
    }

    #[test]
    fn inline_error_hidden_without_error() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<ApiError>);
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(!html.contains("role=\"alert\""));
    }

    #[test]
    fn plain_errors_show_only_the_message() {
        let error = ApiError::request_failed("Erro ao buscar usuários");
        assert!(validation_errors(&error).is_none());
    }
}
