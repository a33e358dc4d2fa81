//! Filter, sort and pagination state behind the user table.
//!
//! Every field change maps to exactly one server query; the helpers here keep
//! the page index inside a range the server can answer.

use crate::api::{Role, User, UserListResponse, ACTIVE_USERS_PATH, INACTIVE_USERS_PATH};

pub const PAGE_SIZE_OPTIONS: [u32; 3] = [10, 50, 100];
pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    FirstName,
    CreatedAt,
}

impl SortField {
    pub fn as_param(&self) -> &'static str {
        match self {
            SortField::FirstName => "firstName",
            SortField::CreatedAt => "createdAt",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_param(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page_index: u32,
    pub page_size: u32,
    pub name_filter: String,
    pub role_filter: Option<Role>,
    pub sort_by: SortField,
    pub order: SortOrder,
    pub show_inactive: bool,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page_index: 1,
            page_size: DEFAULT_PAGE_SIZE,
            name_filter: String::new(),
            role_filter: None,
            sort_by: SortField::default(),
            order: SortOrder::default(),
            show_inactive: false,
        }
    }
}

impl ListQuery {
    /// Same column flips the order; another column starts ascending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_by == field {
            self.order = self.order.flipped();
        } else {
            self.sort_by = field;
            self.order = SortOrder::Asc;
        }
    }

    pub fn apply_filters(&mut self, name: &str, role: Option<Role>) {
        self.name_filter = name.trim().to_string();
        self.role_filter = role;
        self.page_index = 1;
    }

    /// Sizes outside [`PAGE_SIZE_OPTIONS`] are ignored.
    pub fn set_page_size(&mut self, size: u32) -> bool {
        if !PAGE_SIZE_OPTIONS.contains(&size) {
            return false;
        }
        self.page_size = size;
        self.page_index = 1;
        true
    }

    pub fn toggle_inactive(&mut self) {
        self.show_inactive = !self.show_inactive;
        self.page_index = 1;
    }

    pub fn next_page(&mut self, total_pages: u32) {
        self.page_index = (self.page_index + 1).min(total_pages.max(1));
    }

    pub fn previous_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1).max(1);
    }

    pub fn endpoint(&self) -> &'static str {
        if self.show_inactive {
            INACTIVE_USERS_PATH
        } else {
            ACTIVE_USERS_PATH
        }
    }

    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("pageIndex", self.page_index.to_string()),
            ("pageSize", self.page_size.to_string()),
            ("firstName", self.name_filter.clone()),
            ("sortBy", self.sort_by.as_param().to_string()),
            ("order", self.order.as_param().to_string()),
        ];
        if let Some(role) = self.role_filter {
            params.push(("roles", role.as_str().to_string()));
        }
        params
    }

    /// Adopts the pagination the server echoed back. Returns `true` when the
    /// query changed; the caller then writes it back, which refetches once
    /// with the server's values. Missing or zero values leave the local
    /// value alone.
    pub fn reconcile(&mut self, page_index: Option<u32>, page_size: Option<u32>) -> bool {
        let mut changed = false;
        if let Some(index) = page_index.filter(|v| *v > 0) {
            if index != self.page_index {
                self.page_index = index;
                changed = true;
            }
        }
        if let Some(size) = page_size.filter(|v| *v > 0) {
            if size != self.page_size {
                self.page_size = size;
                changed = true;
            }
        }
        changed
    }
}

pub fn total_pages(total_count: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 1;
    }
    let pages = total_count.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX).max(1)
}

/// `"21 - 25 de 25 usuários"`; a single visible row drops the upper bound.
pub fn range_label(page_index: u32, page_size: u32, rows: usize, total_count: u64) -> String {
    if rows == 0 {
        return format!("0 de {} usuários", total_count);
    }
    let first = u64::from(page_index.saturating_sub(1)) * u64::from(page_size) + 1;
    if rows == 1 {
        format!("{} de {} usuários", first, total_count)
    } else {
        let last = first + rows as u64 - 1;
        format!("{} - {} de {} usuários", first, last, total_count)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListResult {
    pub users: Vec<User>,
    pub page_index: Option<u32>,
    pub page_size: Option<u32>,
    pub total_count: u64,
}

impl From<UserListResponse> for ListResult {
    fn from(response: UserListResponse) -> Self {
        Self {
            users: response.users,
            page_index: response.page_index,
            page_size: response.page_size,
            total_count: response.total_itens,
        }
    }
}
