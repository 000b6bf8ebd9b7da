//! Result of a state mutation: which persisted values changed and what to
//! tell the user.

use crate::notice::Notice;

/// Persisted values a mutation changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Touched {
    pub boards: bool,
    pub current_board: bool,
    pub user: bool,
    pub dark_mode: bool,
}

impl Touched {
    pub const NONE: Touched = Touched {
        boards: false,
        current_board: false,
        user: false,
        dark_mode: false,
    };
    pub const BOARDS: Touched = Touched {
        boards: true,
        ..Touched::NONE
    };
    pub const CURRENT_BOARD: Touched = Touched {
        current_board: true,
        ..Touched::NONE
    };
    pub const USER: Touched = Touched {
        user: true,
        ..Touched::NONE
    };
    pub const DARK_MODE: Touched = Touched {
        dark_mode: true,
        ..Touched::NONE
    };
    pub const ALL: Touched = Touched {
        boards: true,
        current_board: true,
        user: true,
        dark_mode: true,
    };

    pub fn union(self, other: Touched) -> Touched {
        Touched {
            boards: self.boards || other.boards,
            current_board: self.current_board || other.current_board,
            user: self.user || other.user,
            dark_mode: self.dark_mode || other.dark_mode,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Touched::NONE
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outcome {
    pub touched: Touched,
    pub notice: Option<Notice>,
}

impl Outcome {
    /// Nothing happened: rejected input or unknown id
    pub fn unchanged() -> Self {
        Self::default()
    }

    pub fn touched(touched: Touched) -> Self {
        Self {
            touched,
            notice: None,
        }
    }

    pub fn with_notice(mut self, message: impl Into<String>) -> Self {
        self.notice = Some(Notice::success(message));
        self
    }

    pub fn changed(&self) -> bool {
        !self.touched.is_empty()
    }

    /// Message of the attached notice, if any
    pub fn message(&self) -> Option<&str> {
        self.notice.as_ref().map(|n| n.message.as_str())
    }
}
