//! Shared UI primitive library for the Cobalt design system.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, the
//! pagination window calculator, and the stable `data-ui-*` DOM contract
//! consumed by the design-system CSS layers. Applications should compose
//! these primitives instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod class_list;
mod icon;
mod pagination;
mod primitives;

pub use class_list::{class_names, ClassList};
pub use icon::{Icon, IconName, IconSize};
pub use pagination::{clamp_page, compute_window, total_pages, PageMarker};
pub use primitives::{
    Badge, Button, ButtonShape, ButtonSize, ButtonVariant, Card, CheckboxField, Cluster, DataTable,
    Elevation, EmptyState, FieldGroup, FieldVariant, Grid, Heading, IconButton, LayoutAlign,
    LayoutGap, LayoutJustify, LayoutPadding, MenuItem, MenuSeparator, MenuSurface, Modal,
    Pagination, Panel, SectionHeader, SegmentedControl, SegmentedControlOption, SelectField,
    SplitLayout, Stack, Surface, SurfaceVariant, Switch, Tab, TabList, Text, TextField, TextRole,
    TextTone,
};

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        clamp_page, class_names, compute_window, total_pages, Badge, Button, ButtonShape,
        ButtonSize, ButtonVariant, Card, CheckboxField, ClassList, Cluster, DataTable, Elevation,
        EmptyState, FieldGroup, FieldVariant, Grid, Heading, Icon, IconButton, IconName, IconSize,
        LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, MenuItem, MenuSeparator, MenuSurface,
        Modal, PageMarker, Pagination, Panel, SectionHeader, SegmentedControl,
        SegmentedControlOption, SelectField, SplitLayout, Stack, Surface, SurfaceVariant, Switch,
        Tab, TabList, Text, TextField, TextRole, TextTone,
    };
}
