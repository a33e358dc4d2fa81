use leptos::*;

const INPUT_CLASS: &str = "mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg text-fg px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-action-primary-focus";

#[component]
pub fn TextField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] autocomplete: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());
    view! {
        <div>
            <label for=id.clone() class="block text-sm font-medium text-fg-muted">{label}</label>
            <input
                id=id.clone()
                name=id
                type=input_type
                class=INPUT_CLASS
                placeholder=placeholder
                autocomplete=autocomplete
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

/// `<select>` over `(value, label)` pairs. An empty `placeholder` option is
/// rendered first when given.
#[component]
pub fn SelectField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    value: RwSignal<String>,
    options: Vec<(&'static str, &'static str)>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    view! {
        <div>
            <label for=id.clone() class="block text-sm font-medium text-fg-muted">{label}</label>
            <select
                id=id.clone()
                name=id
                class=INPUT_CLASS
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {placeholder.map(|text| view! {
                    <option value="">{text}</option>
                })}
                {options
                    .into_iter()
                    .map(|(option, text)| view! {
                        <option value=option>{text}</option>
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn text_field_renders_label_and_value() {
        let html = render_to_string(move || {
            let value = create_rw_signal("ana@example.com".to_string());
            view! { <TextField id="email" label="E-mail" value=value input_type="email"/> }
        });
        assert!(html.contains("E-mail"));
        assert!(html.contains("type=\"email\""));
    }

    #[test]
    fn select_field_renders_placeholder_and_options() {
        let html = render_to_string(move || {
            let value = create_rw_signal(String::new());
            view! {
                <SelectField
                    id="role"
                    label="Perfil"
                    value=value
                    options=vec![("admin", "Administrador"), ("user", "Usuário")]
                    placeholder="Selecione..."
                />
            }
        });
        assert!(html.contains("Selecione..."));
        assert!(html.contains("Administrador"));
        assert!(html.contains("Usuário"));
    }
}
