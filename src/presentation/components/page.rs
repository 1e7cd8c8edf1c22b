//! Page component
//!
//! Draws the mounted element tree as terminal lines. Block tags start a new
//! line, links and spans stay inline. The focused link is shown reversed and
//! kept inside the visible area. While the search field is edited, a
//! `TextArea` is drawn over it to show the cursor.

use std::mem;

use ratatui::{prelude::*, widgets::*};
use unicode_width::UnicodeWidthStr;

use crate::{
    core::state::{ui::UiState, AppState},
    domain::element::{Element, Node},
};

/// Lines produced from one element tree
#[derive(Debug, Clone, Default)]
pub struct PageLines {
    pub lines: Vec<Line<'static>>,
    /// Line holding the focused link or the edited search field
    pub focused_line: Option<usize>,
    /// Line and column where the edited search field starts
    pub input_anchor: Option<(usize, u16)>,
}

struct LineBuilder<'a> {
    ui: &'a UiState,
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    link_index: usize,
    focused_line: Option<usize>,
    input_anchor: Option<(usize, u16)>,
}

impl<'a> LineBuilder<'a> {
    fn new(ui: &'a UiState) -> Self {
        Self {
            ui,
            lines: vec![],
            current: vec![],
            link_index: 0,
            focused_line: None,
            input_anchor: None,
        }
    }

    fn finish(mut self) -> PageLines {
        self.break_line();
        PageLines {
            lines: self.lines,
            focused_line: self.focused_line,
            input_anchor: self.input_anchor,
        }
    }

    fn push(&mut self, span: Span<'static>) {
        self.current.push(span);
    }

    fn break_line(&mut self) {
        if !self.current.is_empty() {
            self.lines.push(Line::from(mem::take(&mut self.current)));
        }
    }

    fn blank_line(&mut self) {
        self.break_line();
        if self.lines.last().is_some_and(|line| !line.spans.is_empty()) {
            self.lines.push(Line::default());
        }
    }

    fn mark_focused(&mut self) {
        self.focused_line = Some(self.lines.len());
    }

    fn walk(&mut self, node: &Node, style: Style) {
        match node {
            Node::Text(content) => self.push(Span::styled(content.clone(), style)),
            Node::Element(element) => self.walk_element(element, style),
        }
    }

    fn walk_children(&mut self, element: &Element, style: Style) {
        for child in &element.children {
            self.walk(child, style);
        }
    }

    fn walk_element(&mut self, element: &Element, style: Style) {
        match element.tag.as_str() {
            "a" => {
                let mut link_style = style.fg(Color::Blue).underlined();
                if self.ui.focused_link() == Some(self.link_index) {
                    link_style = link_style.reversed();
                    self.mark_focused();
                }
                self.link_index += 1;
                self.walk_children(element, link_style);
            }
            "span" if element.has_class("label") => self.walk_children(element, style.bold()),
            "span" => self.walk_children(element, style),
            "input" => self.push_input(element, style),
            "button" => {
                let button_style = if element.attrs.contains_key("disabled") {
                    style.fg(Color::DarkGray)
                } else {
                    style.bold()
                };
                self.push(Span::styled(" [ ", button_style));
                self.walk_children(element, button_style);
                self.push(Span::styled(" ]", button_style));
            }
            "img" => {
                self.break_line();
                let src = element.attrs.get("src").cloned().unwrap_or_default();
                self.push(Span::styled(format!("Image: {src}"), style.dim()));
                self.break_line();
            }
            "h1" | "h3" => {
                self.break_line();
                self.walk_children(element, style.fg(Color::Cyan).bold());
                self.blank_line();
            }
            "h2" | "h4" => {
                self.break_line();
                self.walk_children(element, style.bold());
                self.break_line();
            }
            _ => {
                self.break_line();
                let block_style = if element.has_class("loading") {
                    style.fg(Color::Yellow).italic()
                } else if element.has_class("not-found") {
                    style.fg(Color::Red)
                } else {
                    style
                };
                self.walk_children(element, block_style);
                if element.has_class("result")
                    || element.tag == "form"
                    || element.tag == "section"
                    || element.has_class("back")
                {
                    self.blank_line();
                } else {
                    self.break_line();
                }
            }
        }
    }

    fn push_input(&mut self, element: &Element, style: Style) {
        let value = element.attrs.get("value").cloned().unwrap_or_default();
        self.push(Span::styled("Search: [", style));
        if self.ui.is_editing() {
            self.mark_focused();
            let column: usize = self.current.iter().map(|span| span.content.width()).sum();
            self.input_anchor = Some((
                self.lines.len(),
                u16::try_from(column).unwrap_or(u16::MAX),
            ));
            // trailing cell for a cursor at the end
            self.push(Span::styled(format!("{value} "), style));
        } else {
            self.push(Span::styled(value, style));
        }
        self.push(Span::styled("]", style));
    }
}

/// Lay out `node` as lines, marking focus from `ui`.
pub fn page_lines(node: &Node, ui: &UiState) -> PageLines {
    let mut builder = LineBuilder::new(ui);
    builder.walk(node, Style::default());
    builder.finish()
}

/// Rows a line occupies once wrapped to `width` columns
fn wrapped_rows(line: &Line<'_>, width: u16) -> usize {
    let line_width: usize = line
        .spans
        .iter()
        .map(|span| span.content.as_ref().width())
        .sum();
    line_width.div_ceil(usize::from(width.max(1))).max(1)
}

fn rows_before(page: &PageLines, line: usize, width: u16) -> usize {
    page.lines
        .iter()
        .take(line)
        .map(|line| wrapped_rows(line, width))
        .sum()
}

/// Scroll offset that keeps `focused_line` on screen
fn scroll_offset(page: &PageLines, area: Rect) -> u16 {
    let Some(focused) = page.focused_line else {
        return 0;
    };
    let height = usize::from(area.height.max(1));
    let offset = (rows_before(page, focused, area.width) + 1).saturating_sub(height);
    u16::try_from(offset).unwrap_or(u16::MAX)
}

/// Screen area of the edited search field, if it is visible
fn input_area(page: &PageLines, area: Rect, offset: u16, value: &str) -> Option<Rect> {
    let (line, column) = page.input_anchor?;
    let row = rows_before(page, line, area.width).checked_sub(usize::from(offset))?;
    let row = u16::try_from(row).ok().filter(|row| *row < area.height)?;
    let remaining = area.width.checked_sub(column).filter(|w| *w > 0)?;
    let width = u16::try_from(value.width() + 1).unwrap_or(u16::MAX);
    Some(Rect::new(
        area.x + column,
        area.y + row,
        width.min(remaining),
        1,
    ))
}

/// Page component
///
/// Stateless: renders whatever subtree the shell has mounted.
#[derive(Debug, Clone, Default)]
pub struct PageComponent;

impl PageComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, mounted: Option<&Node>, frame: &mut Frame, area: Rect) {
        let Some(node) = mounted else {
            return;
        };
        let page = page_lines(node, &state.ui);
        let offset = scroll_offset(&page, area);
        let input_area = input_area(&page, area, offset, &state.ui.input.value);
        let paragraph = Paragraph::new(page.lines)
            .wrap(Wrap { trim: false })
            .scroll((offset, 0));
        frame.render_widget(paragraph, area);

        if let Some(input_area) = input_area {
            let mut textarea = state.ui.input.textarea();
            textarea.set_cursor_line_style(Style::default());
            frame.render_widget(&textarea, input_area);
        }
    }
}
