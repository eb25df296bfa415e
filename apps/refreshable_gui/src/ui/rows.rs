use refresh_core::RefreshableState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row<'a> {
    CancelButton,
    Item(&'a str),
}

/// Rows of the list in render order. The cancel control leads the list only while refreshing.
pub fn visible_rows(state: &RefreshableState) -> Vec<Row<'_>> {
    let mut rows = Vec::with_capacity(state.items.len() + 1);
    if state.is_refreshing {
        rows.push(Row::CancelButton);
    }
    rows.extend(state.items.iter().map(|item| Row::Item(item.as_str())));
    rows
}

#[cfg(test)]
#[path = "tests/rows_tests.rs"]
mod tests;
