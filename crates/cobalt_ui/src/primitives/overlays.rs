use super::*;

#[component]
/// Shared overlay surface for menus, popups, and result lists.
pub fn MenuSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menu-surface", layout_class)
            id=id
            role=role
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="menu-surface"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared overlay menu item primitive.
pub fn MenuItem(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    // aria-selected is only valid on role-bearing items such as listbox options.
    let has_role = role.is_some();
    let aria_selected = Signal::derive(move || {
        if !has_role {
            String::new()
        } else if selected.get() {
            "true".to_string()
        } else {
            "false".to_string()
        }
    });

    view! {
        <Button
            layout_class=layout_class.unwrap_or("")
            id=id.unwrap_or_default()
            role=role.unwrap_or_default()
            aria_label=aria_label.unwrap_or_default()
            aria_selected=aria_selected
            disabled=disabled
            selected=selected
            ui_slot="menu-item"
            variant=ButtonVariant::Quiet
            on_click=Callback::new(move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            })
        >
            <span data-ui-slot="check" aria-hidden="true">
                {move || {
                    if selected.get() {
                        view! { <Icon icon=IconName::Checkmark size=IconSize::Xs /> }.into_view()
                    } else {
                        ().into_view()
                    }
                }}
            </span>
            {leading_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            <span data-ui-slot="label">{children()}</span>
        </Button>
    }
}

#[component]
/// Shared overlay menu separator.
pub fn MenuSeparator(#[prop(optional)] layout_class: Option<&'static str>) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menu-separator", layout_class)
            role="separator"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="menu-separator"
        ></div>
    }
}

#[component]
/// Shared modal dialog with a dismiss affordance, backdrop dismissal, and
/// an Escape shortcut that is only armed while the dialog is open.
///
/// Fully controlled: the owner holds the open flag and applies `on_close`
/// to clear it. Clicks inside the dialog never reach the backdrop.
pub fn Modal(
    #[prop(into)] open: MaybeSignal<bool>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let class = merge_layout_class("ui-modal", layout_class);
    let dialog_label = aria_label.or_else(|| title.clone());

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <ModalEscapeTrap on_close />
            <div
                class="ui-modal-backdrop"
                data-ui-primitive="true"
                data-ui-kind="modal-backdrop"
                on:mousedown=move |_| on_close.call(())
            >
                <section
                    class=class.clone()
                    role="dialog"
                    aria-modal="true"
                    aria-label=dialog_label.clone()
                    data-ui-primitive="true"
                    data-ui-kind="modal"
                    data-ui-elevation=Elevation::Overlay.token()
                    on:mousedown=move |ev| ev.stop_propagation()
                >
                    <header data-ui-slot="header">
                        {title.clone().map(|title| view! { <Heading>{title}</Heading> })}
                        <IconButton
                            icon=IconName::Dismiss
                            size=ButtonSize::Sm
                            ui_slot="dismiss"
                            aria_label="Close dialog"
                            on_click=Callback::new(move |_| on_close.call(()))
                        />
                    </header>
                    <div data-ui-slot="body">{children()}</div>
                </section>
            </div>
        </Show>
    }
}

#[component]
fn ModalEscapeTrap(on_close: Callback<()>) -> impl IntoView {
    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" {
            return;
        }
        ev.prevent_default();
        on_close.call(());
    });
    on_cleanup(move || escape_listener.remove());
}
