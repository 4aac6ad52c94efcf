#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StringMatchType {
    Equals,
    StartsWith,
    EndsWith,
    Contains,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StringMatch {
    pub r#match: StringMatchType,
    pub value: String,
}

impl StringMatch {
    pub fn contains(value: impl Into<String>) -> Self {
        Self {
            r#match: StringMatchType::Contains,
            value: value.into(),
        }
    }

    pub fn equals(value: impl Into<String>) -> Self {
        Self {
            r#match: StringMatchType::Equals,
            value: value.into(),
        }
    }

    pub fn starts_with(value: impl Into<String>) -> Self {
        Self {
            r#match: StringMatchType::StartsWith,
            value: value.into(),
        }
    }

    pub fn ends_with(value: impl Into<String>) -> Self {
        Self {
            r#match: StringMatchType::EndsWith,
            value: value.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ComparisonType {
    Equal,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ValueComparison<T> {
    pub comparison: ComparisonType,
    pub value: T,
}

impl<T> ValueComparison<T> {
    pub fn new(comparison: ComparisonType, value: T) -> Self {
        Self { comparison, value }
    }
}

pub trait ListFilterValue {
    fn condition(self) -> ListFilterCondition<Self>
    where
        Self: Sized,
    {
        ListFilterCondition::Value(self)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ListFilterCondition<FV: ListFilterValue> {
    And(Vec<ListFilterCondition<FV>>),
    Or(Vec<ListFilterCondition<FV>>),
    Not(Box<ListFilterCondition<FV>>),
    Value(FV),
}

// default implemented as an empty filter - matches every row
impl<FV: ListFilterValue> Default for ListFilterCondition<FV> {
    fn default() -> Self {
        Self::And(vec![])
    }
}

impl<FV: ListFilterValue> ListFilterCondition<FV> {
    /// Conjunction of `conditions`, without wrapping a single condition
    pub fn all(conditions: impl IntoIterator<Item = ListFilterCondition<FV>>) -> Self {
        let mut conditions: Vec<_> = conditions
            .into_iter()
            .filter(|condition| !condition.is_empty())
            .collect();

        match conditions.len() {
            1 => conditions.remove(0),
            _ => Self::And(conditions),
        }
    }

    /// Disjunction of `conditions`, without wrapping a single condition.
    /// No conditions at all result in the empty (match everything) filter.
    pub fn any(conditions: impl IntoIterator<Item = ListFilterCondition<FV>>) -> Self {
        let mut conditions: Vec<_> = conditions
            .into_iter()
            .filter(|condition| !condition.is_empty())
            .collect();

        match conditions.len() {
            0 => Self::default(),
            1 => conditions.remove(0),
            _ => Self::Or(conditions),
        }
    }

    /// Whether the condition imposes no restriction.
    /// A disjunction with an unrestricted branch matches every row.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::And(conditions) => conditions.iter().all(ListFilterCondition::is_empty),
            Self::Or(conditions) => {
                conditions.is_empty() || conditions.iter().any(ListFilterCondition::is_empty)
            }
            Self::Not(_) | Self::Value(_) => false,
        }
    }
}

impl<FV: ListFilterValue> From<FV> for ListFilterCondition<FV> {
    fn from(value: FV) -> Self {
        ListFilterCondition::Value(value)
    }
}

impl<FV: ListFilterValue> From<Option<FV>> for ListFilterCondition<FV> {
    fn from(value: Option<FV>) -> Self {
        if let Some(filter) = value {
            ListFilterCondition::Value(filter)
        } else {
            ListFilterCondition::default()
        }
    }
}

// implement shorthand operators:  &, |, !
impl<FV: ListFilterValue> std::ops::BitAnd<ListFilterCondition<FV>> for ListFilterCondition<FV> {
    type Output = Self;
    fn bitand(self, rhs: ListFilterCondition<FV>) -> Self::Output {
        if self.is_empty() {
            return rhs;
        }
        if rhs.is_empty() {
            return self;
        }

        match self {
            ListFilterCondition::And(mut conditions) => match rhs {
                ListFilterCondition::And(rhs) => Self::And({
                    conditions.extend(rhs);
                    conditions
                }),
                rhs => Self::And({
                    conditions.push(rhs);
                    conditions
                }),
            },
            _ => Self::And(vec![self, rhs]),
        }
    }
}

impl<FV: ListFilterValue> std::ops::BitAnd<FV> for ListFilterCondition<FV> {
    type Output = Self;
    fn bitand(self, rhs: FV) -> Self::Output {
        self & Self::Value(rhs)
    }
}

impl<FV: ListFilterValue> std::ops::BitAnd<Option<ListFilterCondition<FV>>>
    for ListFilterCondition<FV>
{
    type Output = Self;
    fn bitand(self, rhs: Option<ListFilterCondition<FV>>) -> Self::Output {
        if let Some(rhs) = rhs {
            self & rhs
        } else {
            self
        }
    }
}

impl<FV: ListFilterValue> std::ops::BitOr<ListFilterCondition<FV>> for ListFilterCondition<FV> {
    type Output = Self;
    fn bitor(self, rhs: ListFilterCondition<FV>) -> Self::Output {
        match self {
            ListFilterCondition::Or(mut conditions) => match rhs {
                ListFilterCondition::Or(rhs) => Self::Or({
                    conditions.extend(rhs);
                    conditions
                }),
                rhs => Self::Or({
                    conditions.push(rhs);
                    conditions
                }),
            },
            _ => Self::Or(vec![self, rhs]),
        }
    }
}

impl<FV: ListFilterValue> std::ops::BitOr<FV> for ListFilterCondition<FV> {
    type Output = Self;
    fn bitor(self, rhs: FV) -> Self::Output {
        self | Self::Value(rhs)
    }
}

impl<FV: ListFilterValue> std::ops::Not for ListFilterCondition<FV> {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            ListFilterCondition::Not(inner) => *inner,
            condition => Self::Not(Box::new(condition)),
        }
    }
}
