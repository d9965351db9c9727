use serde::{Deserialize, Serialize};

use crate::domain::validation::{Validate, Violation};

pub const MIN_PAGE_NUMBER: u32 = 1;
pub const MIN_PAGE_SIZE: u32 = 1;
pub const MAX_PAGE_SIZE: u32 = 1000;

/// A 1-based page request. Concrete feature filters embed this and add
/// their own fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageFilter {
    pub page_number: u32,
    pub page_size: u32,
}

/// The offset/limit pair derived from a validated `PageFilter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub skip: u64,
    pub take: u32,
}

impl PageFilter {
    pub fn new(page_number: u32, page_size: u32) -> Self {
        Self {
            page_number,
            page_size,
        }
    }

    /// Validate the request and derive its offset/limit window. The window
    /// is computed only after validation succeeds.
    pub fn window(&self) -> Result<PageWindow, Vec<Violation>> {
        let violations = self.validate();
        if !violations.is_empty() {
            return Err(violations);
        }

        Ok(PageWindow {
            skip: u64::from(self.page_number - 1) * u64::from(self.page_size),
            take: self.page_size,
        })
    }
}

impl Default for PageFilter {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: 50,
        }
    }
}

impl Validate for PageFilter {
    fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        if self.page_number < MIN_PAGE_NUMBER {
            violations.push(Violation::new(
                "page_number",
                "below_minimum",
                MIN_PAGE_NUMBER.to_string(),
            ));
        }

        if self.page_size < MIN_PAGE_SIZE {
            violations.push(Violation::new(
                "page_size",
                "below_minimum",
                MIN_PAGE_SIZE.to_string(),
            ));
        }

        if self.page_size > MAX_PAGE_SIZE {
            violations.push(Violation::new(
                "page_size",
                "above_maximum",
                MAX_PAGE_SIZE.to_string(),
            ));
        }

        violations
    }
}
