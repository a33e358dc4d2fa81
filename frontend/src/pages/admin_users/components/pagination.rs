use crate::pages::admin_users::query::{range_label, PAGE_SIZE_OPTIONS};
use leptos::*;

const NAV_BUTTON_CLASS: &str = "inline-flex items-center justify-center rounded-md px-6 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover w-32 disabled:opacity-50 disabled:cursor-not-allowed";

#[component]
pub fn Pagination(
    page_index: Signal<u32>,
    page_size: Signal<u32>,
    rows: Signal<usize>,
    total_count: Signal<u64>,
    total_pages: Signal<u32>,
    on_page_size: Callback<u32>,
    on_previous: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    let range = move || {
        format!(
            "Exibindo {}",
            range_label(page_index.get(), page_size.get(), rows.get(), total_count.get())
        )
    };

    view! {
        <div class="flex flex-col md:flex-row justify-between items-center gap-4 mt-6 p-4 bg-surface-muted rounded shadow">
            <div class="flex items-center gap-4">
                <div class="text-fg-muted text-sm">{range}</div>
                <label class="text-fg-muted text-sm flex items-center gap-1">
                    <span>"Itens por página:"</span>
                    <select
                        class="border border-border rounded px-2 py-1 focus:outline-none"
                        prop:value=move || page_size.get().to_string()
                        on:change=move |ev| {
                            if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                                on_page_size.call(size);
                            }
                        }
                    >
                        {PAGE_SIZE_OPTIONS
                            .iter()
                            .map(|size| view! { <option value=size.to_string()>{*size}</option> })
                            .collect_view()}
                    </select>
                </label>
            </div>
            <div class="flex items-center gap-2 w-full md:w-auto">
                <button
                    type="button"
                    class=NAV_BUTTON_CLASS
                    disabled=move || page_index.get() <= 1
                    on:click=move |_| on_previous.call(())
                >
                    "Anterior"
                </button>
                <span class="font-bold w-32 text-center text-fg">
                    {move || format!("Página {} de {}", page_index.get(), total_pages.get())}
                </span>
                <button
                    type="button"
                    class=NAV_BUTTON_CLASS
                    disabled=move || page_index.get() >= total_pages.get()
                    on:click=move |_| on_next.call(())
                >
                    "Próxima"
                </button>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn last_page_shows_range_and_position() {
        let html = render_to_string(move || {
            view! {
                <Pagination
                    page_index=Signal::derive(|| 3)
                    page_size=Signal::derive(|| 10)
                    rows=Signal::derive(|| 5)
                    total_count=Signal::derive(|| 25)
                    total_pages=Signal::derive(|| 3)
                    on_page_size=Callback::new(|_| {})
                    on_previous=Callback::new(|_| {})
                    on_next=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Exibindo 21 - 25 de 25 usuários"));
        assert!(html.contains("Página 3 de 3"));
        assert!(html.contains("Anterior"));
        assert!(html.contains("Próxima"));
        assert!(html.contains("value=\"100\""));
    }
}
