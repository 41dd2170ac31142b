// models/cash.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recorded deposit. Never updated once inserted.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CashEntry {
    pub uuid: Uuid,
    pub amount: f64,
    pub detail: String,
    pub note: String,
    pub client: String,
    pub contact: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCash {
    pub contact: String,
    pub amount: f64,
    pub detail: String,
    pub note: String,
}

/// Columns of `cashes` that the listing endpoint can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Uuid,
    Client,
    Contact,
    Amount,
    Detail,
    Note,
}

impl FilterField {
    pub const ALL: [FilterField; 6] = [
        FilterField::Uuid,
        FilterField::Client,
        FilterField::Contact,
        FilterField::Amount,
        FilterField::Detail,
        FilterField::Note,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.column() == key)
    }

    pub fn column(self) -> &'static str {
        match self {
            FilterField::Uuid => "uuid",
            FilterField::Client => "client",
            FilterField::Contact => "contact",
            FilterField::Amount => "amount",
            FilterField::Detail => "detail",
            FilterField::Note => "note",
        }
    }
}

/// Case-insensitive regex filter over `cashes`.
///
/// Each field present becomes `<column>::text ~* $n`; predicates are joined
/// with `AND`. Repeated values for one field are joined with `|`, so
/// `contact=A&contact=B` matches either. Values are always bound, never
/// spliced into the statement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CashFilter {
    predicates: Vec<(FilterField, String)>,
}

impl CashFilter {
    pub fn from_query<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut grouped: Vec<(FilterField, Vec<String>)> = Vec::new();

        for (key, value) in pairs {
            let Some(field) = FilterField::from_key(key.as_ref()) else {
                continue;
            };
            let value = normalize_value(field, value.as_ref());

            match grouped.iter_mut().find(|(existing, _)| *existing == field) {
                Some((_, values)) => values.push(value),
                None => grouped.push((field, vec![value])),
            }
        }

        CashFilter {
            predicates: grouped
                .into_iter()
                .map(|(field, values)| (field, values.join("|")))
                .collect(),
        }
    }

    /// Renders the `WHERE` fragment with placeholders numbered from
    /// `first_index`. Empty when there are no predicates.
    pub fn where_clause(&self, first_index: usize) -> String {
        if self.predicates.is_empty() {
            return String::new();
        }

        let conditions: Vec<String> = self
            .predicates
            .iter()
            .enumerate()
            .map(|(i, (field, _))| format!("{}::text ~* ${}", field.column(), first_index + i))
            .collect();

        format!(" WHERE {}", conditions.join(" AND "))
    }

    pub fn binds(&self) -> Vec<&str> {
        self.predicates.iter().map(|(_, pattern)| pattern.as_str()).collect()
    }
}

// A phone number with a leading `+` arrives with a space in its place once
// the query string is decoded; keep only what follows the first space.
fn normalize_value(field: FilterField, value: &str) -> String {
    match (field, value.split_once(' ')) {
        (FilterField::Contact, Some((_, rest))) => rest.to_string(),
        _ => value.to_string(),
    }
}
