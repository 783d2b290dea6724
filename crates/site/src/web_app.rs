use cobalt_chrome::{AppHeader, ChromeProvider, SearchOverlay, Sidebar};
use cobalt_ui::{LayoutGap, SplitLayout};
use gallery::Gallery;
use leptos::*;
use leptos_meta::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Cobalt design system" />
        <Meta name="description" content="Component gallery for the Cobalt design system." />

        <ChromeProvider>
            <div class="site-root">
                <AppHeader title="Cobalt design system" />
                <SplitLayout gap=LayoutGap::Lg layout_class="site-body">
                    <Sidebar />
                    <main class="site-content">
                        <Gallery />
                    </main>
                </SplitLayout>
                <SearchOverlay />
            </div>
        </ChromeProvider>
    }
}
