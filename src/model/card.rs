//! Summary cards laid out in groups.

use serde::{Deserialize, Serialize};

use super::enums::{Category, ScalarType, WidgetKind};
use super::scalar::Scalar;
use super::widget::WidgetMeta;

static NULL_SCALAR: Scalar = Scalar::null();

/// A single card: a title, one value and the group it is displayed in.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct CardData {
    #[prost(string, tag = "1")]
    pub title: String,
    #[prost(message, optional, tag = "2")]
    pub value: Option<Scalar>,
    #[prost(enumeration = "ScalarType", tag = "3")]
    pub value_type: i32,
    #[prost(uint32, tag = "4")]
    pub group: u32,
}

impl CardData {
    pub fn new(
        title: impl Into<String>,
        value: Scalar,
        value_type: ScalarType,
        group: u32,
    ) -> Self {
        Self {
            title: title.into(),
            value: Some(value),
            value_type: value_type as i32,
            group,
        }
    }

    /// The card value, null when unset.
    pub fn scalar(&self) -> &Scalar {
        self.value.as_ref().unwrap_or(&NULL_SCALAR)
    }
}

/// A collection of cards; every `group_size` cards form one visual group.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct CardDef {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub title: String,
    #[prost(enumeration = "WidgetKind", tag = "3")]
    pub kind: i32,
    #[prost(enumeration = "Category", tag = "4")]
    pub category: i32,
    #[prost(message, repeated, tag = "5")]
    pub data: Vec<CardData>,
    #[prost(uint32, tag = "6")]
    pub group_size: u32,
}

impl CardDef {
    pub const ACCEPTED_KINDS: &'static [WidgetKind] = &[WidgetKind::Card];

    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        kind: WidgetKind,
        category: Category,
        group_size: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind: kind as i32,
            category: category as i32,
            data: Vec::new(),
            group_size,
        }
    }

    pub fn with_card(mut self, card: CardData) -> Self {
        self.data.push(card);
        self
    }

    pub fn push_card(&mut self, card: CardData) {
        self.data.push(card);
    }

    pub fn cards(&self) -> &[CardData] {
        &self.data
    }

    /// Number of groups the cards form: `ceil(cards / group_size)`.
    ///
    /// Zero when there are no cards or `group_size` is zero.
    pub fn group_count(&self) -> u32 {
        if self.group_size == 0 {
            return 0;
        }
        let cards = u32::try_from(self.data.len()).unwrap_or(u32::MAX);
        cards.div_ceil(self.group_size)
    }

    /// Cards belonging to `group`, in insertion order.
    pub fn group(&self, group: u32) -> impl Iterator<Item = &CardData> + '_ {
        self.data.iter().filter(move |c| c.group == group)
    }
}

impl WidgetMeta for CardDef {
    fn widget_id(&self) -> &str {
        &self.id
    }

    fn widget_title(&self) -> &str {
        &self.title
    }

    fn raw_widget_kind(&self) -> i32 {
        self.kind
    }

    fn raw_widget_category(&self) -> i32 {
        self.category
    }

    fn accepted_kinds(&self) -> &'static [WidgetKind] {
        Self::ACCEPTED_KINDS
    }
}
