//! Component gallery for the Cobalt design system.
//!
//! Renders every control family through `cobalt_ui` primitives against live
//! local state, so visual refinements can be reviewed in one continuous page
//! without app-local design contracts. Section ids line up with the chrome
//! sidebar and search index targets.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use cobalt_ui::prelude::*;
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewMode {
    Grid,
    List,
}

impl ViewMode {
    fn label(self) -> &'static str {
        match self {
            Self::Grid => "Grid",
            Self::List => "List",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocTab {
    Preview,
    Usage,
    Tokens,
}

impl DocTab {
    const ALL: [DocTab; 3] = [DocTab::Preview, DocTab::Usage, DocTab::Tokens];

    fn label(self) -> &'static str {
        match self {
            Self::Preview => "Preview",
            Self::Usage => "Usage",
            Self::Tokens => "Tokens",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Self::Preview => "preview",
            Self::Usage => "usage",
            Self::Tokens => "tokens",
        }
    }

    fn blurb(self) -> &'static str {
        match self {
            Self::Preview => {
                "Rendered specimens sit on the same surface plane as the page, so \
                 shadow and contrast changes are reviewed in context."
            }
            Self::Usage => {
                "Each primitive is a pure function of caller-owned signals. Wire \
                 state in, receive events out, and keep ownership in the app."
            }
            Self::Tokens => {
                "Styling hangs off ui-* classes and data-ui-* attributes only. \
                 Themes restyle every family without touching component markup."
            }
        }
    }
}

/// Pager inputs for the review-queue table. The page is only ever moved
/// through the pagination callback or reclamped when the page size changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TableQuery {
    page: usize,
    per_page: usize,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self { page: 1, per_page: 8 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ReviewRow {
    id: usize,
    name: String,
    area: &'static str,
    status: &'static str,
}

const REVIEW_TOPICS: [&str; 6] = [
    "Contrast audit",
    "Focus ring pass",
    "Spacing sweep",
    "Motion review",
    "Copy check",
    "Token sync",
];

const REVIEW_AREAS: [&str; 4] = ["Controls", "Layout", "Overlays", "Navigation"];

const REVIEW_STATUSES: [&str; 3] = ["Stable", "Preview", "Draft"];

fn sample_rows() -> Vec<ReviewRow> {
    (1..=57)
        .map(|id| ReviewRow {
            id,
            name: format!("{} {id:02}", REVIEW_TOPICS[(id - 1) % REVIEW_TOPICS.len()]),
            area: REVIEW_AREAS[(id - 1) % REVIEW_AREAS.len()],
            status: REVIEW_STATUSES[(id - 1) % REVIEW_STATUSES.len()],
        })
        .collect()
}

fn status_tone(status: &str) -> TextTone {
    match status {
        "Stable" => TextTone::Success,
        "Preview" => TextTone::Accent,
        _ => TextTone::Secondary,
    }
}

/// Half-open row range for one page, clamped to the data set.
fn page_bounds(row_count: usize, page: usize, per_page: usize) -> (usize, usize) {
    let start = page.saturating_sub(1).saturating_mul(per_page).min(row_count);
    let end = start.saturating_add(per_page).min(row_count);
    (start, end)
}

#[component]
/// Full-page tour of the Cobalt primitive families.
///
/// Owns all demo state itself; nothing here persists or escapes the page.
pub fn Gallery() -> impl IntoView {
    view! {
        <Stack gap=LayoutGap::Lg layout_class="gallery" ui_slot="content">
            <OverviewSection />
            <ControlsSection />
            <ReviewQueueSection />
            <OverlaysSection />
        </Stack>
    }
}

#[component]
fn OverviewSection() -> impl IntoView {
    view! {
        <section id="overview" class="gallery-section">
            <Stack gap=LayoutGap::Md>
                <SectionHeader
                    title="Cobalt component gallery"
                    meta="Shared primitives, shared tokens, one continuous surface"
                >
                    <Badge tone=TextTone::Accent>"design system"</Badge>
                </SectionHeader>
                <Grid gap=LayoutGap::Md layout_class="gallery-pillars">
                    <Card>
                        <Heading>"Tokens first"</Heading>
                        <Text tone=TextTone::Secondary>
                            "Primitives emit ui-* classes and data-ui-* attributes and \
                             nothing else, so a stylesheet swap restyles the whole set."
                        </Text>
                    </Card>
                    <Card>
                        <Heading>"Controlled state"</Heading>
                        <Text tone=TextTone::Secondary>
                            "Every component below is a pure function of signals this \
                             page owns. Events flow out through callbacks, never into \
                             hidden component state."
                        </Text>
                    </Card>
                    <Card>
                        <Heading>"Windowed navigation"</Heading>
                        <Text tone=TextTone::Secondary>
                            "The review queue drives the page-window calculator against \
                             a live table, including the boundary and ellipsis rules."
                        </Text>
                    </Card>
                </Grid>
            </Stack>
        </section>
    }
}

#[component]
fn ControlsSection() -> impl IntoView {
    let view_mode = create_rw_signal(ViewMode::Grid);
    let active_tab = create_rw_signal(DocTab::Preview);
    let project_name = create_rw_signal("Cobalt handbook".to_string());
    let status_filter = create_rw_signal("All".to_string());
    let digest_enabled = create_rw_signal(true);
    let reduced_motion = create_rw_signal(false);

    view! {
        <section id="controls" class="gallery-section">
            <Stack gap=LayoutGap::Md>
                <SectionHeader
                    title="Controls"
                    meta="Buttons, fields, toggles, and tabs against live state"
                >
                    ""
                </SectionHeader>

                <Panel>
                    <Stack gap=LayoutGap::Md>
                        <Heading>"Buttons"</Heading>
                        <Cluster gap=LayoutGap::Sm>
                            <Button>"Standard"</Button>
                            <Button variant=ButtonVariant::Primary>"Primary"</Button>
                            <Button variant=ButtonVariant::Quiet>"Quiet"</Button>
                            <Button variant=ButtonVariant::Accent>"Accent"</Button>
                            <Button variant=ButtonVariant::Danger>"Danger"</Button>
                        </Cluster>
                        <Cluster gap=LayoutGap::Sm>
                            <Button size=ButtonSize::Sm>"Small"</Button>
                            <Button size=ButtonSize::Lg>"Large"</Button>
                            <Button shape=ButtonShape::Pill variant=ButtonVariant::Primary>
                                "Pill"
                            </Button>
                            <Button leading_icon=IconName::Search>"Search"</Button>
                            <Button trailing_icon=IconName::ChevronDown>"Options"</Button>
                        </Cluster>
                        <Cluster gap=LayoutGap::Sm>
                            <Button variant=ButtonVariant::Primary pressed=true>"Pressed"</Button>
                            <Button selected=true>"Selected"</Button>
                            <Button disabled=true>"Disabled"</Button>
                            <IconButton icon=IconName::Home aria_label="Home" />
                            <IconButton icon=IconName::Dismiss aria_label="Dismiss" />
                        </Cluster>
                        <Cluster gap=LayoutGap::Sm>
                            <SegmentedControl aria_label="Specimen layout">
                                <SegmentedControlOption
                                    selected=Signal::derive(move || view_mode.get() == ViewMode::Grid)
                                    on_click=Callback::new(move |_| view_mode.set(ViewMode::Grid))
                                >
                                    "Grid"
                                </SegmentedControlOption>
                                <SegmentedControlOption
                                    selected=Signal::derive(move || view_mode.get() == ViewMode::List)
                                    on_click=Callback::new(move |_| view_mode.set(ViewMode::List))
                                >
                                    "List"
                                </SegmentedControlOption>
                            </SegmentedControl>
                            <Text tone=TextTone::Secondary>
                                {move || format!("Layout: {}", view_mode.get().label())}
                            </Text>
                        </Cluster>
                    </Stack>
                </Panel>

                <Panel>
                    <Stack gap=LayoutGap::Md>
                        <Heading>"Fields"</Heading>
                        <FieldGroup
                            title="Project name"
                            description="Plain text input with a controlled value."
                        >
                            <TextField
                                aria_label="Project name"
                                value=Signal::derive(move || project_name.get())
                                on_input=Callback::new(move |ev| {
                                    project_name.set(event_target_value(&ev));
                                })
                            />
                        </FieldGroup>
                        <FieldGroup
                            title="Status filter"
                            description="Native select, same field chrome."
                        >
                            <SelectField
                                aria_label="Status filter"
                                value=Signal::derive(move || status_filter.get())
                                on_change=Callback::new(move |ev| {
                                    status_filter.set(event_target_value(&ev));
                                })
                            >
                                <option value="All">"All"</option>
                                <option value="Stable">"Stable"</option>
                                <option value="Preview">"Preview"</option>
                                <option value="Draft">"Draft"</option>
                            </SelectField>
                        </FieldGroup>
                        <Cluster justify=LayoutJustify::Between>
                            <Stack gap=LayoutGap::None>
                                <Text>"Weekly digest"</Text>
                                <Text role=TextRole::Caption tone=TextTone::Secondary>
                                    "Checkbox primitive with controlled checked state."
                                </Text>
                            </Stack>
                            <CheckboxField
                                aria_label="Weekly digest"
                                checked=Signal::derive(move || digest_enabled.get())
                                on_change=Callback::new(move |ev| {
                                    digest_enabled.set(event_target_checked(&ev));
                                })
                            />
                        </Cluster>
                        <Cluster justify=LayoutJustify::Between>
                            <Stack gap=LayoutGap::None>
                                <Text>"Reduced motion"</Text>
                                <Text role=TextRole::Caption tone=TextTone::Secondary>
                                    "Switch with explicit role and keyboard support."
                                </Text>
                            </Stack>
                            <Switch
                                aria_label="Reduced motion"
                                checked=Signal::derive(move || reduced_motion.get())
                                on_toggle=Callback::new(move |next| reduced_motion.set(next))
                            />
                        </Cluster>
                    </Stack>
                </Panel>

                <Panel>
                    <Stack gap=LayoutGap::Md>
                        <Heading>"Tabs"</Heading>
                        <TabList aria_label="Component documentation">
                            {DocTab::ALL
                                .into_iter()
                                .map(|tab| {
                                    view! {
                                        <Tab
                                            id=format!("gallery-tab-{}", tab.slug())
                                            controls=format!("gallery-panel-{}", tab.slug())
                                            selected=Signal::derive(move || active_tab.get() == tab)
                                            tabindex=Signal::derive(move || {
                                                if active_tab.get() == tab { 0 } else { -1 }
                                            })
                                            on_click=Callback::new(move |_| active_tab.set(tab))
                                        >
                                            {tab.label()}
                                        </Tab>
                                    }
                                })
                                .collect_view()}
                        </TabList>
                        <div
                            class="gallery-tab-panel"
                            role="tabpanel"
                            id=move || format!("gallery-panel-{}", active_tab.get().slug())
                            aria-labelledby=move || format!("gallery-tab-{}", active_tab.get().slug())
                        >
                            <Text tone=TextTone::Secondary>{move || active_tab.get().blurb()}</Text>
                        </div>
                    </Stack>
                </Panel>
            </Stack>
        </section>
    }
}

#[component]
fn ReviewQueueSection() -> impl IntoView {
    let rows = store_value(sample_rows());
    let row_count = rows.with_value(|rows| rows.len());
    let query = create_rw_signal(TableQuery::default());

    let page_count = Signal::derive(move || total_pages(row_count, query.get().per_page));
    let visible_rows = Signal::derive(move || {
        let TableQuery { page, per_page } = query.get();
        let (start, end) = page_bounds(row_count, page, per_page);
        rows.with_value(|rows| rows[start..end].to_vec())
    });

    let change_page = Callback::new(move |page| query.update(|query| query.page = page));
    let change_per_page = Callback::new(move |ev| {
        let Ok(per_page) = event_target_value(&ev).parse::<usize>() else {
            return;
        };
        query.update(|query| {
            query.per_page = per_page.max(1);
            // A shorter data set per page can leave the old page past the end.
            query.page = clamp_page(query.page, total_pages(row_count, query.per_page));
        });
    });

    view! {
        <section id="data-table" class="gallery-section">
            <Stack gap=LayoutGap::Md>
                <SectionHeader
                    title="Review queue"
                    meta="Windowed pagination against a live table"
                >
                    <Badge>{format!("{row_count} entries")}</Badge>
                </SectionHeader>
                <Panel>
                    <Stack gap=LayoutGap::Md>
                        <DataTable aria_label="Design review queue">
                            <thead>
                                <tr>
                                    <th>"Entry"</th>
                                    <th>"Area"</th>
                                    <th>"Status"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || visible_rows.get()
                                    key=|row| row.id
                                    let:row
                                >
                                    <tr>
                                        <td>{row.name}</td>
                                        <td>{row.area}</td>
                                        <td>
                                            <Badge tone=status_tone(row.status)>{row.status}</Badge>
                                        </td>
                                    </tr>
                                </For>
                            </tbody>
                        </DataTable>
                        <Cluster justify=LayoutJustify::Between>
                            <Cluster gap=LayoutGap::Sm>
                                <Text tone=TextTone::Secondary>"Rows per page"</Text>
                                <SelectField
                                    aria_label="Rows per page"
                                    value=Signal::derive(move || query.get().per_page.to_string())
                                    on_change=change_per_page
                                >
                                    <option value="5">"5"</option>
                                    <option value="8">"8"</option>
                                    <option value="12">"12"</option>
                                    <option value="20">"20"</option>
                                </SelectField>
                                <Text tone=TextTone::Secondary>
                                    {move || {
                                        let TableQuery { page, per_page } = query.get();
                                        let (start, end) = page_bounds(row_count, page, per_page);
                                        format!("Showing {}-{} of {row_count}", start + 1, end)
                                    }}
                                </Text>
                            </Cluster>
                            <Pagination
                                current_page=Signal::derive(move || query.get().page)
                                total_pages=page_count
                                aria_label="Review queue pages"
                                on_page_change=change_page
                            />
                        </Cluster>
                    </Stack>
                </Panel>
            </Stack>
        </section>
    }
}

const DENSITY_PRESETS: [&str; 3] = ["Comfortable", "Compact", "Relaxed"];

const DENSITY_FALLBACK: &str = "System default";

#[component]
fn OverlaysSection() -> impl IntoView {
    let dialog_open = create_rw_signal(false);
    let menu_open = create_rw_signal(false);
    let density = create_rw_signal(DENSITY_FALLBACK.to_string());

    let close_dialog = Callback::new(move |_: ()| dialog_open.set(false));

    view! {
        <section id="overlays" class="gallery-section">
            <Stack gap=LayoutGap::Md>
                <SectionHeader
                    title="Overlays"
                    meta="Dialog and menu surfaces above the base plane"
                >
                    ""
                </SectionHeader>
                <Panel>
                    <Stack gap=LayoutGap::Md>
                        <Heading>"Menu"</Heading>
                        <Cluster gap=LayoutGap::Sm>
                            <Button
                                trailing_icon=IconName::ChevronDown
                                aria_haspopup="listbox"
                                aria_expanded=menu_open
                                on_click=Callback::new(move |_| {
                                    menu_open.update(|open| *open = !*open);
                                })
                            >
                                {move || format!("Density: {}", density.get())}
                            </Button>
                            <Button
                                variant=ButtonVariant::Quiet
                                on_click=Callback::new(move |_| dialog_open.set(true))
                            >
                                "Open dialog"
                            </Button>
                        </Cluster>
                        <Show when=move || menu_open.get() fallback=|| ()>
                            <MenuSurface role="listbox" aria_label="Density presets">
                                {DENSITY_PRESETS
                                    .iter()
                                    .map(|preset| {
                                        view! {
                                            <MenuItem
                                                role="option"
                                                selected=Signal::derive(move || density.get() == *preset)
                                                on_click=Callback::new(move |_| {
                                                    density.set((*preset).to_string());
                                                    menu_open.set(false);
                                                })
                                            >
                                                {*preset}
                                            </MenuItem>
                                        }
                                    })
                                    .collect_view()}
                                <MenuSeparator />
                                <MenuItem
                                    role="option"
                                    leading_icon=IconName::Desktop
                                    selected=Signal::derive(move || density.get() == DENSITY_FALLBACK)
                                    on_click=Callback::new(move |_| {
                                        density.set(DENSITY_FALLBACK.to_string());
                                        menu_open.set(false);
                                    })
                                >
                                    {DENSITY_FALLBACK}
                                </MenuItem>
                            </MenuSurface>
                        </Show>
                    </Stack>
                </Panel>
                <Panel>
                    <Stack gap=LayoutGap::Md>
                        <Heading>"Dialog"</Heading>
                        <Text tone=TextTone::Secondary>
                            "The modal closes from its corner button, the backdrop, or \
                             Escape, and always reports back through one callback."
                        </Text>
                        <Modal
                            open=dialog_open
                            title="Apply density preset"
                            on_close=close_dialog
                        >
                            <Text tone=TextTone::Secondary>
                                "Presets retune spacing tokens for every primitive on the \
                                 page. Nothing changes until you apply."
                            </Text>
                            <Cluster justify=LayoutJustify::End gap=LayoutGap::Sm>
                                <Button on_click=Callback::new(move |_| dialog_open.set(false))>
                                    "Cancel"
                                </Button>
                                <Button
                                    variant=ButtonVariant::Primary
                                    on_click=Callback::new(move |_| dialog_open.set(false))
                                >
                                    "Apply"
                                </Button>
                            </Cluster>
                        </Modal>
                    </Stack>
                </Panel>
            </Stack>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_page_fills_the_per_page_budget() {
        assert_eq!(page_bounds(57, 1, 8), (0, 8));
    }

    #[test]
    fn final_page_carries_the_remainder() {
        assert_eq!(total_pages(57, 8), 8);
        assert_eq!(page_bounds(57, 8, 8), (56, 57));
    }

    #[test]
    fn bounds_never_pass_the_end_of_the_data_set() {
        assert_eq!(page_bounds(57, 12, 8), (57, 57));
        assert_eq!(page_bounds(0, 1, 8), (0, 0));
    }

    #[test]
    fn reclamping_after_a_page_size_change_lands_on_the_last_page() {
        let mut query = TableQuery { page: 12, per_page: 5 };
        assert_eq!(total_pages(57, query.per_page), 12);

        query.per_page = 20;
        query.page = clamp_page(query.page, total_pages(57, query.per_page));

        assert_eq!(query, TableQuery { page: 3, per_page: 20 });
        assert_eq!(page_bounds(57, query.page, query.per_page), (40, 57));
    }

    #[test]
    fn sample_rows_are_deterministic_and_distinct() {
        let rows = sample_rows();

        assert_eq!(rows.len(), 57);
        assert_eq!(rows, sample_rows());
        assert_eq!(rows[0].name, "Contrast audit 01");
        assert_eq!(rows[0].status, "Stable");
        assert_eq!(rows[56].name, "Spacing sweep 57");

        let ids: Vec<usize> = rows.iter().map(|row| row.id).collect();
        assert_eq!(ids, (1..=57).collect::<Vec<_>>());
    }

    #[test]
    fn every_status_maps_to_a_badge_tone() {
        assert_eq!(status_tone("Stable"), TextTone::Success);
        assert_eq!(status_tone("Preview"), TextTone::Accent);
        assert_eq!(status_tone("Draft"), TextTone::Secondary);
    }
}
