use url::form_urlencoded;

use crate::filters::{FilterTable, OrderField};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum OrderDirection {
    Asc,
    Desc,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Order {
    field: Option<&'static str>,
    direction: Option<OrderDirection>,
}

/// Declarative description of the query parameters of one list fetch.
///
/// Filters accumulate in insertion order (setting a key twice keeps the last
/// value in the first position), a later `order` replaces an earlier one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FetchOptions {
    filters: Vec<(String, String)>,
    order: Option<Order>,
    limit: Option<u32>,
    offset: Option<u32>,
}

impl FetchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();

        match self.filters.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, existing)) => *existing = value,
            None => self.filters.push((key, value)),
        }

        self
    }

    /// Appends every set entry of a filter table, unset entries are skipped.
    #[must_use]
    pub fn filters(self, table: &impl FilterTable) -> Self {
        table
            .entries()
            .into_iter()
            .filter_map(|(key, value)| Some((key, value?)))
            .fold(self, |options, (key, value)| options.filter(key, value))
    }

    /// Restricts a leaderboard to one value of a subcategory variable.
    #[must_use]
    pub fn variable(self, variable_id: &str, value_id: impl Into<String>) -> Self {
        self.filter(format!("var-{variable_id}"), value_id)
    }

    #[must_use]
    pub fn order<F: OrderField>(mut self, field: Option<F>, direction: Option<OrderDirection>) -> Self {
        self.order = Some(Order {
            field: field.map(|field| field.as_wire()),
            direction,
        });
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn get_limit(&self) -> Option<u32> {
        self.limit
    }

    pub fn get_offset(&self) -> Option<u32> {
        self.offset
    }

    pub fn has_filter(&self, key: &str) -> bool {
        self.filters.iter().any(|(existing, _)| existing == key)
    }

    /// Query pairs in wire order: filters, `orderby`/`direction`, `max`/`offset`.
    pub fn query_pairs(&self) -> Vec<(&str, String)> {
        let mut pairs: Vec<(&str, String)> = self
            .filters
            .iter()
            .map(|(key, value)| (key.as_str(), value.clone()))
            .collect();

        if let Some(order) = &self.order {
            if let Some(field) = order.field {
                pairs.push(("orderby", field.to_string()));
            }
            if let Some(direction) = order.direction {
                pairs.push(("direction", direction.to_string()));
            }
        }

        if let Some(limit) = self.limit {
            pairs.push(("max", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }

        pairs
    }

    /// The encoded query string, `None` when there is nothing to encode.
    pub fn query_string(&self) -> Option<String> {
        let pairs = self.query_pairs();
        if pairs.is_empty() {
            return None;
        }

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in pairs {
            serializer.append_pair(key, &value);
        }

        Some(serializer.finish())
    }
}
