use async_graphql::{
    connection::{Connection, CursorType, Edge},
    OutputType,
};
use speedrun::{Cursor, FetchOptions, PageInfo};

use crate::error::invalid_argument;

/// Edge cursor of every connection in the schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OffsetCursor(pub Cursor);

impl CursorType for OffsetCursor {
    type Error = speedrun::Error;

    fn decode_cursor(s: &str) -> Result<Self, Self::Error> {
        s.parse().map(OffsetCursor)
    }

    fn encode_cursor(&self) -> String {
        self.0.to_string()
    }
}

/// Applies `first` and `after` to the options of a list read.
pub(crate) fn paged(options: FetchOptions, first: Option<i32>, after: Option<&str>) -> speedrun::Result<FetchOptions> {
    let mut options = options;

    if let Some(first) = first {
        let limit = u32::try_from(first).map_err(|_| invalid_argument("first must not be negative"))?;
        options = options.limit(limit);
    }

    if let Some(after) = after {
        let cursor: Cursor = after.parse()?;
        let room = options.get_limit().unwrap_or(1);

        if cursor.offset().checked_add(room).is_none() {
            return Err(invalid_argument("after points past the last addressable item"));
        }

        options = options.offset(cursor.offset());
    }

    Ok(options)
}

/// Builds a connection over one page of upstream results.
///
/// The cursor of the item at position `i` encodes `offset + i + 1`, the offset
/// of the item following it, so it can be handed back as `after`. Positions
/// saturate at the largest offset a cursor can hold.
pub(crate) fn connection<T, N, F>(
    items: Vec<T>,
    page: Option<&PageInfo>,
    options: &FetchOptions,
    wrap: F,
) -> Connection<OffsetCursor, N>
where
    N: OutputType,
    F: Fn(T) -> N,
{
    let offset = page
        .map(|page| page.offset)
        .or_else(|| options.get_offset())
        .unwrap_or_default();

    let has_next_page = page.is_some_and(PageInfo::has_next_page);
    let mut connection = Connection::new(offset > 0, has_next_page);

    connection.edges.extend(items.into_iter().enumerate().map(|(i, item)| {
        let position = u32::try_from(i).unwrap_or(u32::MAX);
        let cursor = OffsetCursor(Cursor::from_offset(offset.saturating_add(position).saturating_add(1)));

        Edge::new(cursor, wrap(item))
    }));

    connection
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_first_is_rejected() {
        let error = paged(FetchOptions::new(), Some(-1), None).unwrap_err();
        assert_eq!(error.code(), speedrun::ErrorCode::BadRequest);
    }

    #[test]
    fn after_resumes_at_the_encoded_offset() {
        let after = Cursor::from_offset(40).to_string();
        let options = paged(FetchOptions::new(), Some(20), Some(&after)).unwrap();

        assert_eq!(options.get_limit(), Some(20));
        assert_eq!(options.get_offset(), Some(40));
    }

    #[test]
    fn after_at_the_largest_offset_is_rejected() {
        let after = Cursor::from_offset(u32::MAX).to_string();
        let error = paged(FetchOptions::new(), Some(1), Some(&after)).unwrap_err();

        assert_eq!(error.code(), speedrun::ErrorCode::BadRequest);
    }

    #[test]
    fn edge_cursors_saturate_near_the_largest_offset() {
        let options = FetchOptions::new().offset(u32::MAX - 1);
        let connection = connection(vec![7, 8, 9], None, &options, |x| x);

        let cursors: Vec<_> = connection.edges.iter().map(|edge| edge.cursor.0.offset()).collect();

        assert_eq!(cursors, vec![u32::MAX, u32::MAX, u32::MAX]);
        assert!(connection.has_previous_page);
    }

    #[test]
    fn edge_cursors_point_past_their_item() {
        let options = FetchOptions::new().offset(40);
        let connection = connection(vec![7, 8], None, &options, |x| x);

        let cursors: Vec<_> = connection.edges.iter().map(|edge| edge.cursor.0.offset()).collect();

        assert_eq!(cursors, vec![41, 42]);
    }

    #[test]
    fn garbage_cursor_is_an_error() {
        assert!(paged(FetchOptions::new(), None, Some("%%%")).is_err());
    }
}
