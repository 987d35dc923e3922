use chrono::NaiveDate;
use log::warn;

use crate::TextSizeLevel;

/// Format of displayed date, e.g. "July 9, 1985".
pub const DATE_FORMAT: &str = "%B %-d, %Y";

/// The largest text size supported by picker.
pub const MAX_TEXT_SIZE: TextSizeLevel = TextSizeLevel::Accessibility5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessibilityTrait {
    Button,
}

/// Information announced by assistive technologies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Accessibility {
    pub label: String,
    pub hint: String,
    pub traits: Vec<AccessibilityTrait>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Detent {
    Medium,
    Large,
}

/// Modal sheet with date wheels, presented while user selects a date.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sheet {
    pub title: &'static str,
    pub control_label: &'static str,
    pub confirm: &'static str,
    pub detents: [Detent; 2],
    pub drag_indicator: bool,
}

const SHEET: Sheet = Sheet {
    title: "Select Date",
    control_label: "Date picker. Use the wheels to select month, day, and year.",
    confirm: "Done",
    detents: [Detent::Medium, Detent::Large],
    drag_indicator: true,
};

/// Accessible date picker, a button showing readable date which opens sheet with date wheels.
pub struct DatePicker {
    selected: NaiveDate,
    presented: bool,
}

impl DatePicker {
    pub fn new(selected: NaiveDate) -> Self {
        Self {
            selected,
            presented: false,
        }
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    pub fn formatted_date(&self) -> String {
        format_date(self.selected)
    }

    pub fn accessibility(&self) -> Accessibility {
        Accessibility {
            label: "Date picker".to_string(),
            hint: format!(
                "Double tap to select a date. Currently selected: {}",
                self.formatted_date()
            ),
            traits: vec![AccessibilityTrait::Button],
        }
    }

    /// Text size picker is rendered with, every level up to the largest one is supported.
    pub fn text_size(&self, level: TextSizeLevel) -> TextSizeLevel {
        match level {
            TextSizeLevel::Unknown => TextSizeLevel::Medium,
            level => level.min(MAX_TEXT_SIZE),
        }
    }

    pub fn is_presented(&self) -> bool {
        self.presented
    }

    pub fn sheet(&self) -> Option<&'static Sheet> {
        if self.presented {
            Some(&SHEET)
        } else {
            None
        }
    }

    pub fn open(&mut self) {
        self.presented = true;
    }

    /// Date chosen with wheels, only possible while sheet is presented.
    pub fn select(&mut self, date: NaiveDate) {
        if !self.presented {
            warn!("unable to select date {date}, picker sheet is not presented");
            return;
        }
        self.selected = date;
    }

    pub fn confirm(&mut self) {
        self.presented = false;
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
