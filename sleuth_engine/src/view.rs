//! View module.
//! Rather than printing to the console from each handler, handlers push [`ViewItem`]s
//! describing what happened. The REPL flushes the aggregated frame once a command has
//! been fully processed, so a turn's output is always complete before the next prompt.

use textwrap::fill;
use variantly::Variantly;

use crate::Direction;
use crate::story;
use crate::style::{GameStyle, indented_block, normal_block, text_width};

/// View aggregates information to be displayed on each pass through the REPL and then
/// organizes and displays the result.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    pub items: Vec<ViewEntry>,
    pub sequence: usize,
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    /// Create a new empty view.
    pub fn new() -> Self {
        Self {
            width: text_width(),
            items: Vec::new(),
            sequence: 0,
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(ViewEntry {
            section: item.section(),
            view_item: item,
            sequence: self.sequence,
        });
        self.sequence += 1;
    }

    /// Items pushed since the last flush, in push order.
    pub fn view_items(&self) -> impl Iterator<Item = &ViewItem> {
        self.items.iter().map(|entry| &entry.view_item)
    }

    /// Compose the current frame: sections in display order, push order within a section.
    pub fn render_frame(&self) -> String {
        let mut entries: Vec<&ViewEntry> = self.items.iter().collect();
        entries.sort_by_key(|entry| (entry.section, entry.sequence));

        let mut lines = Vec::new();
        for entry in entries {
            self.render_item(&entry.view_item, &mut lines);
        }
        lines.join("\n")
    }

    /// Compose and display all message contents in the current frame / turn.
    pub fn flush(&mut self) {
        // re-check terminal width in case it's been resized
        self.width = text_width();
        if self.items.is_empty() {
            return;
        }
        println!("{}", self.render_frame());
        // clear the buffer for the next turn
        self.items.clear();
    }

    fn render_item(&self, item: &ViewItem, lines: &mut Vec<String>) {
        match item {
            ViewItem::Banner(title) => {
                lines.push(format!("{:^width$}", title.banner_style(), width = self.width));
            },
            ViewItem::RoomDescription { name, description } => {
                lines.push(String::new());
                lines.push(format!("--- {name} ---").room_titlebar_style().to_string());
                lines.push(fill(description, normal_block(self.width)).description_style().to_string());
            },
            ViewItem::RoomItems(names) => lines.push(items_line(names).item_style().to_string()),
            ViewItem::RoomExits(directions) => lines.push(exits_line(directions).exit_style().to_string()),
            ViewItem::TransitionMessage(msg) => {
                lines.push(String::new());
                lines.push(fill(msg, normal_block(self.width)).transition_style().to_string());
            },
            ViewItem::Narrative(text) => {
                lines.push(String::new());
                lines.push(fill(text, normal_block(self.width)).narrative_style().to_string());
            },
            ViewItem::Help(entries) => {
                lines.push(String::new());
                lines.push("--- How to Play ---".subheading_style().to_string());
                for entry in entries {
                    lines.push(fill(&format!("* {entry}"), normal_block(self.width)));
                }
                lines.push("--------------------".to_string());
            },
            ViewItem::ItemTaken { name, description } => {
                lines.push(String::new());
                lines.push(fill(&story::item_taken(name), normal_block(self.width)));
                lines.push(fill(&format!("\"{description}\""), indented_block(self.width)).quote_style().to_string());
            },
            ViewItem::Inventory(names) => {
                lines.push(String::new());
                if names.is_empty() {
                    lines.push("Your inventory is empty.".to_string());
                } else {
                    lines.push("--- Inventory ---".subheading_style().to_string());
                    for name in names {
                        lines.push(format!("- {}", name.item_style()));
                    }
                    lines.push("-----------------".to_string());
                }
            },
            ViewItem::ActionFailure(msg) => {
                lines.push(String::new());
                lines.push(fill(msg, normal_block(self.width)).denied_style().to_string());
            },
            ViewItem::Error(msg) => {
                lines.push(String::new());
                lines.push(fill(msg, normal_block(self.width)).error_style().to_string());
            },
            ViewItem::EngineMessage(msg) => {
                lines.push(String::new());
                lines.push(msg.engine_style().to_string());
            },
        }
    }
}

/// "You notice the following: ..." line for the items lying in a room.
pub fn items_line(names: &[String]) -> String {
    format!("You notice the following: {}.", names.join(", "))
}

/// "Exits are: ..." line. Still produced for a room without exits.
pub fn exits_line(directions: &[Direction]) -> String {
    let labels: Vec<_> = directions.iter().map(|dir| dir.label()).collect();
    format!("Exits are: {}.", labels.join(", "))
}

/// Sections of an output frame, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    Transition,
    Environment,
    DirectResult,
    Story,
    System,
}

/// A `ViewItem` along with its place in the frame.
#[derive(Debug, Clone)]
pub struct ViewEntry {
    pub section: Section,
    pub view_item: ViewItem,
    pub sequence: usize,
}

/// Everything a handler can ask the view to show.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    ActionFailure(String),
    Banner(String),
    EngineMessage(String),
    Error(String),
    Help(Vec<String>),
    Inventory(Vec<String>),
    ItemTaken { name: String, description: String },
    Narrative(String),
    RoomDescription { name: String, description: String },
    RoomExits(Vec<Direction>),
    RoomItems(Vec<String>),
    TransitionMessage(String),
}

impl ViewItem {
    /// Which frame section this item is shown in.
    pub fn section(&self) -> Section {
        match self {
            ViewItem::Banner(_) | ViewItem::TransitionMessage(_) => Section::Transition,
            ViewItem::RoomDescription { .. } | ViewItem::RoomItems(_) | ViewItem::RoomExits(_) => {
                Section::Environment
            },
            ViewItem::ItemTaken { .. } | ViewItem::Inventory(_) | ViewItem::ActionFailure(_) | ViewItem::Error(_) => {
                Section::DirectResult
            },
            ViewItem::Narrative(_) | ViewItem::Help(_) => Section::Story,
            ViewItem::EngineMessage(_) => Section::System,
        }
    }
}
