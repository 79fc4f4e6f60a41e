use indie_coach_engine::{
    BudgetTable, ChatSession, MessageView, RenderNode, TicketEstimator, TicketField,
};
use ratatui::widgets::ListState;

/// Editable state of one widget shown in the selected session.
#[derive(Debug, Clone, PartialEq)]
pub enum Calculator {
    Budget(BudgetTable),
    Ticket(TicketEstimator),
}

/// One editable input of a calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Estimate of the budget row at this index.
    Estimate(usize),
    Ticket(TicketField),
}

/// The field that currently receives typed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Focus {
    pub calculator: usize,
    pub field: Field,
}

impl Calculator {
    fn from_node(node: &RenderNode) -> Option<Self> {
        match node {
            RenderNode::BudgetTable { data } => Some(Calculator::Budget(BudgetTable::new(data))),
            RenderNode::TicketEstimator { data } => {
                Some(Calculator::Ticket(TicketEstimator::new(&data.defaults)))
            }
            _ => None,
        }
    }

    fn fields(&self) -> Vec<Field> {
        match self {
            Calculator::Budget(table) => (0..table.estimates().len()).map(Field::Estimate).collect(),
            Calculator::Ticket(_) => TicketField::ALL.into_iter().map(Field::Ticket).collect(),
        }
    }

    pub fn value(&self, field: Field) -> Option<f64> {
        match (self, field) {
            (Calculator::Budget(table), Field::Estimate(row)) => table.estimates().get(row).copied(),
            (Calculator::Ticket(estimator), Field::Ticket(field)) => Some(estimator.get(field)),
            _ => None,
        }
    }

    fn apply(&mut self, field: Field, input: &str) {
        match (self, field) {
            (Calculator::Budget(table), Field::Estimate(row)) => table.set_estimate(row, input),
            (Calculator::Ticket(estimator), Field::Ticket(field)) => estimator.set(field, input),
            _ => {}
        }
    }

    fn reset(&mut self) {
        match self {
            Calculator::Budget(table) => table.reset(),
            Calculator::Ticket(estimator) => estimator.reset(),
        }
    }
}

pub struct App {
    pub sessions: Vec<ChatSession>,
    pub session_state: ListState,
    /// One view per message of the selected session.
    pub views: Vec<MessageView>,
    /// Calculators of the selected session, in display order.
    pub calculators: Vec<Calculator>,
    /// Raw text typed into the focused field.
    pub buffer: String,
    pub scroll: u16,
    focus: Option<usize>,
}

impl App {
    pub fn new(sessions: Vec<ChatSession>) -> Self {
        let mut app = Self {
            sessions,
            session_state: ListState::default(),
            views: Vec::new(),
            calculators: Vec::new(),
            buffer: String::new(),
            scroll: 0,
            focus: None,
        };

        if !app.sessions.is_empty() {
            app.select(0);
        }

        app
    }

    pub fn selected_session(&self) -> Option<&ChatSession> {
        self.session_state
            .selected()
            .and_then(|i| self.sessions.get(i))
    }

    pub fn next_session(&mut self) {
        if self.sessions.is_empty() {
            return;
        }
        let i = match self.session_state.selected() {
            Some(i) => (i + 1) % self.sessions.len(),
            None => 0,
        };
        self.select(i);
    }

    pub fn previous_session(&mut self) {
        if self.sessions.is_empty() {
            return;
        }
        let i = match self.session_state.selected() {
            Some(0) | None => self.sessions.len() - 1,
            Some(i) => i - 1,
        };
        self.select(i);
    }

    /// Selects a session and rebuilds its views. Calculator edits made in
    /// the previous session are dropped.
    fn select(&mut self, index: usize) {
        self.session_state.select(Some(index));
        self.views.clear();
        self.calculators.clear();
        self.focus = None;
        self.buffer.clear();
        self.scroll = 0;

        let Some(session) = self.sessions.get(index) else {
            return;
        };
        for message in &session.messages {
            let view = MessageView::of(message);
            if let MessageView::Rich(rendered) = &view {
                self.calculators
                    .extend(rendered.nodes.iter().filter_map(Calculator::from_node));
            }
            self.views.push(view);
        }
        log::debug!(
            "selected session {} with {} calculators",
            session.id,
            self.calculators.len()
        );
    }

    /// Every editable field of the selected session, in display order.
    fn focusable(&self) -> Vec<Focus> {
        self.calculators
            .iter()
            .enumerate()
            .flat_map(|(calculator, c)| {
                c.fields()
                    .into_iter()
                    .map(move |field| Focus { calculator, field })
            })
            .collect()
    }

    pub fn focused(&self) -> Option<Focus> {
        self.focus.and_then(|i| self.focusable().get(i).copied())
    }

    pub fn focus_next(&mut self) {
        let count = self.focusable().len();
        if count == 0 {
            return;
        }
        self.focus = Some(match self.focus {
            Some(i) => (i + 1) % count,
            None => 0,
        });
        self.load_buffer();
    }

    pub fn focus_previous(&mut self) {
        let count = self.focusable().len();
        if count == 0 {
            return;
        }
        self.focus = Some(match self.focus {
            Some(0) | None => count - 1,
            Some(i) => i - 1,
        });
        self.load_buffer();
    }

    pub fn clear_focus(&mut self) {
        self.focus = None;
        self.buffer.clear();
    }

    /// Types a character into the focused field. Only digits and `.` are
    /// accepted.
    pub fn input_char(&mut self, c: char) {
        if self.focused().is_none() || !(c.is_ascii_digit() || c == '.') {
            return;
        }
        self.buffer.push(c);
        self.apply_buffer();
    }

    pub fn backspace(&mut self) {
        if self.focused().is_none() {
            return;
        }
        self.buffer.pop();
        self.apply_buffer();
    }

    /// Moves a ticket slider field by `steps` steps.
    pub fn nudge(&mut self, steps: f64) {
        let Some(Focus {
            calculator,
            field: Field::Ticket(field),
        }) = self.focused()
        else {
            return;
        };
        if let Some(Calculator::Ticket(estimator)) = self.calculators.get_mut(calculator) {
            estimator.nudge(field, steps);
        }
        self.load_buffer();
    }

    /// Restores the focused calculator to its payload values.
    pub fn reset_focused(&mut self) {
        let Some(focus) = self.focused() else {
            return;
        };
        if let Some(calculator) = self.calculators.get_mut(focus.calculator) {
            calculator.reset();
        }
        self.load_buffer();
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    fn load_buffer(&mut self) {
        self.buffer = self
            .focused()
            .and_then(|f| self.calculators.get(f.calculator)?.value(f.field))
            .map(|v| v.to_string())
            .unwrap_or_default();
    }

    fn apply_buffer(&mut self) {
        let Some(focus) = self.focused() else {
            return;
        };
        if let Some(calculator) = self.calculators.get_mut(focus.calculator) {
            calculator.apply(focus.field, &self.buffer);
        }
    }
}
