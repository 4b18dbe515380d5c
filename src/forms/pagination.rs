//! Parsing of `page`, `size` and `sort` query parameters.
//!
//! `sort` may repeat (`?sort=name&sort=crm,desc`); keys are applied in the
//! order given. Unrelated parameters are ignored.

use crate::forms::FormError;
use crate::repository::{DEFAULT_PAGE_SIZE, PageRequest, SortDirection, SortField};

fn parse_number(key: &str, value: &str) -> Result<usize, FormError> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| FormError::InvalidPagination(format!("{key} must be a non-negative integer")))
}

fn parse_sort<F: SortField>(value: &str) -> Result<(F, SortDirection), FormError> {
    let mut parts = value.split(',').map(str::trim);
    let name = parts.next().unwrap_or_default();
    let field = F::from_name(name)
        .ok_or_else(|| FormError::InvalidPagination(format!("cannot sort by '{name}'")))?;

    let direction = match parts.next().map(str::to_ascii_lowercase).as_deref() {
        None | Some("") | Some("asc") => SortDirection::Asc,
        Some("desc") => SortDirection::Desc,
        Some(other) => {
            return Err(FormError::InvalidPagination(format!(
                "unknown sort direction '{other}'"
            )));
        }
    };

    Ok((field, direction))
}

/// Builds a [`PageRequest`] from raw query pairs.
pub fn page_request_from_query<F: SortField>(
    pairs: &[(String, String)],
) -> Result<PageRequest<F>, FormError> {
    let mut page = 0;
    let mut size = DEFAULT_PAGE_SIZE;
    let mut sort = Vec::new();

    for (key, value) in pairs {
        match key.as_str() {
            "page" => page = parse_number(key, value)?,
            "size" => size = parse_number(key, value)?,
            "sort" => sort.push(parse_sort::<F>(value)?),
            _ => {}
        }
    }

    Ok(sort
        .into_iter()
        .fold(PageRequest::new(page, size), |request, (field, direction)| {
            request.sort_by(field, direction)
        }))
}
