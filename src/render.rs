//! View Renderer
//!
//! Projects a [`StatePayload`] into the view model the components draw.
//! Every call rebuilds the whole page; nothing is patched.

use crate::icon::{IconFactory, IconRef};
use crate::models::{Category, Item, StatePayload};

/// The two text fields kept in sync with the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputField {
    DisableArgument,
    Markdown,
}

impl OutputField {
    #[cfg(test)]
    pub const ALL: [OutputField; 2] = [OutputField::DisableArgument, OutputField::Markdown];

    /// DOM id, also used as the `data-copy-target` value
    pub fn element_id(self) -> &'static str {
        match self {
            OutputField::DisableArgument => "disable-output",
            OutputField::Markdown => "markdown-output",
        }
    }

    #[cfg(test)]
    pub fn from_element_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.element_id() == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleView {
    /// Rendered as `data-code`, traces a click back to exactly one item
    pub code: String,
    pub enabled: bool,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub code: String,
    pub name: String,
    pub enabled: bool,
    pub icon: IconRef,
    pub toggle: ToggleView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    pub title: String,
    pub enabled_count: usize,
    pub cards: Vec<CardView>,
}

impl SectionView {
    pub fn summary(&self) -> String {
        format!("{} / {} enabled", self.enabled_count, self.cards.len())
    }
}

/// Everything the page shows that derives from server state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageView {
    pub sections: Vec<SectionView>,
    pub disable_argument: String,
    pub markdown: String,
    pub updated_at: Option<String>,
}

impl PageView {
    pub fn output(&self, field: OutputField) -> &str {
        match field {
            OutputField::DisableArgument => &self.disable_argument,
            OutputField::Markdown => &self.markdown,
        }
    }

    #[cfg(test)]
    pub fn toggle(&self, code: &str) -> Option<&ToggleView> {
        self.sections
            .iter()
            .flat_map(|section| section.cards.iter())
            .map(|card| &card.toggle)
            .find(|toggle| toggle.code == code)
    }
}

/// `"true"` / `"false"` as written into `data-enabled`
pub fn data_flag(enabled: bool) -> &'static str {
    if enabled {
        "true"
    } else {
        "false"
    }
}

pub fn toggle_label(enabled: bool) -> &'static str {
    if enabled {
        "Enabled"
    } else {
        "Disabled"
    }
}

#[derive(Debug, Clone)]
pub struct ViewRenderer {
    icons: IconFactory,
}

impl ViewRenderer {
    pub fn new(icons: IconFactory) -> Self {
        Self { icons }
    }

    pub fn render(&self, payload: &StatePayload) -> PageView {
        PageView {
            sections: payload
                .categories
                .iter()
                .map(|category| self.section(category))
                .collect(),
            disable_argument: payload.disable_argument.clone(),
            markdown: payload.markdown.clone(),
            updated_at: payload.updated_at.clone(),
        }
    }

    fn section(&self, category: &Category) -> SectionView {
        let cards: Vec<CardView> = category.items.iter().map(|item| self.card(item)).collect();
        SectionView {
            title: category.title.clone(),
            enabled_count: cards.iter().filter(|card| card.enabled).count(),
            cards,
        }
    }

    fn card(&self, item: &Item) -> CardView {
        CardView {
            code: item.code.clone(),
            name: item.name.clone(),
            enabled: item.enabled,
            icon: self.icons.create(&item.code),
            toggle: ToggleView {
                code: item.code.clone(),
                enabled: item.enabled,
                label: toggle_label(item.enabled),
            },
        }
    }
}
