//! Query evaluation over in-memory documents.
//!
//! Ordering follows hosted document stores: values compare first by type
//! (null < boolean < number < string < array < object), documents missing
//! an order-by field are excluded, and ties break on the document id in the
//! direction of the last order clause.

use std::cmp::Ordering;

use serde_json::Value;

use memberhub_core::types::query::{FilterField, FilterOp, FilterValue, Query};
use memberhub_core::types::sorting::{SortDirection, SortField};
use memberhub_core::types::StoredDocument;

/// Apply filters, ordering, cursor, and limit of `query` to `docs`.
pub(crate) fn run(query: &Query, mut docs: Vec<StoredDocument>) -> Vec<StoredDocument> {
    docs.retain(|doc| query.filters.iter().all(|filter| matches(doc, filter)));
    docs.retain(|doc| has_order_fields(doc, &query.order_by));
    docs.sort_by(|a, b| compare_docs(a, b, &query.order_by));

    if let Some(cursor) = &query.start_after {
        docs.retain(|doc| compare_docs(doc, cursor, &query.order_by) == Ordering::Greater);
    }

    if let Some(limit) = query.limit {
        docs.truncate(limit);
    }

    docs
}

fn has_order_fields(doc: &StoredDocument, order_by: &[SortField]) -> bool {
    order_by
        .iter()
        .all(|sort| doc.get(&sort.field).is_some_and(|v| !v.is_null()))
}

fn matches(doc: &StoredDocument, filter: &FilterField) -> bool {
    let value = doc.get(&filter.field).filter(|v| !v.is_null());

    match filter.op {
        FilterOp::IsNull => value.is_none(),
        FilterOp::IsNotNull => value.is_some(),
        FilterOp::In => {
            let Some(value) = value else { return false };
            match &filter.value {
                FilterValue::StringList(items) => value
                    .as_str()
                    .is_some_and(|s| items.iter().any(|item| item == s)),
                other => compare_values(value, &other.to_json()) == Ordering::Equal,
            }
        }
        op => {
            let Some(value) = value else { return false };
            let target = filter.value.to_json();
            // Comparisons never cross value types.
            if type_rank(value) != type_rank(&target) {
                return false;
            }
            let ordering = compare_values(value, &target);
            match op {
                FilterOp::Eq => ordering == Ordering::Equal,
                FilterOp::Ne => ordering != Ordering::Equal,
                FilterOp::Gt => ordering == Ordering::Greater,
                FilterOp::Gte => ordering != Ordering::Less,
                FilterOp::Lt => ordering == Ordering::Less,
                FilterOp::Lte => ordering != Ordering::Greater,
                FilterOp::In | FilterOp::IsNull | FilterOp::IsNotNull => false,
            }
        }
    }
}

/// Compare two documents under `order_by`, breaking ties on the id.
pub(crate) fn compare_docs(
    a: &StoredDocument,
    b: &StoredDocument,
    order_by: &[SortField],
) -> Ordering {
    for sort in order_by {
        let ordering = match (a.get(&sort.field), b.get(&sort.field)) {
            (Some(x), Some(y)) => compare_values(x, y),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        let ordering = sort.direction.apply(ordering);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    let direction = order_by
        .last()
        .map(|sort| sort.direction)
        .unwrap_or(SortDirection::Asc);
    direction.apply(a.id.cmp(&b.id))
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Array(x), Value::Array(y)) => {
            for (left, right) in x.iter().zip(y.iter()) {
                let ordering = compare_values(left, right);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            x.len().cmp(&y.len())
        }
        (Value::Object(x), Value::Object(y)) => x.len().cmp(&y.len()),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}
