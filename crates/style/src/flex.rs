//! Defines enums for flex container flow and main-axis justification.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum FlexDirection {
    #[default]
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum FlexWrap {
    #[default]
    NoWrap,
    Wrap,
    WrapReverse,
}

/// Distribution of leftover main-axis space among the items of a line.
///
/// Only the end-like and center members move content; the rest resolve to
/// the packed default and apply no shift.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum JustifyContent {
    #[default]
    Normal,
    Start,
    End,
    Center,
    Stretch,
    FlexStart,
    FlexEnd,
    Left,
    Right,
    SelfStart,
    SelfEnd,
}
