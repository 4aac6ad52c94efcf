use super::common::SortDirection;
use super::list_filter::{ListFilterCondition, ListFilterValue};

#[derive(Clone, Debug, PartialEq)]
pub struct ListQuery<SortableColumn, FV: ListFilterValue> {
    pub pagination: Option<ListPagination>,
    pub sorting: Option<ListSorting<SortableColumn>>,
    pub filtering: Option<ListFilterCondition<FV>>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ListPagination {
    /// zero-based page of fixed size
    Page { page: u32, page_size: u32 },
    /// arbitrary row window
    Window { skip: u64, take: u64 },
}

impl ListPagination {
    pub fn offset(&self) -> u64 {
        match self {
            Self::Page { page, page_size } => *page as u64 * *page_size as u64,
            Self::Window { skip, .. } => *skip,
        }
    }

    pub fn limit(&self) -> u64 {
        match self {
            Self::Page { page_size, .. } => *page_size as u64,
            Self::Window { take, .. } => *take,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListSorting<SortableColumn> {
    pub column: SortableColumn,
    pub direction: Option<SortDirection>,
}

impl<SortableColumn, FV: ListFilterValue> Default for ListQuery<SortableColumn, FV> {
    fn default() -> Self {
        Self {
            pagination: Default::default(),
            sorting: Default::default(),
            filtering: Default::default(),
        }
    }
}
