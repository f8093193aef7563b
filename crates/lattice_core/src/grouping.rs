//! Row grouping for border rectangles.

use crate::border::BorderRect;

/// Group rectangles into rows ordered by `y1`, each row ordered by `x1`.
///
/// The returned structure is the precondition for the border renderer's
/// early-exit culling: rows are ordered by non-decreasing `y1`, every
/// rectangle in a row shares that row's `y1`, and rectangles within a row
/// are ordered by non-decreasing `x1`. Both sorts are stable, so rectangles
/// that compare equal keep their input order.
///
/// The input is copied, never mutated. Recompute only when the rectangle
/// set changes; the result can be fed to any number of render passes.
pub fn group_by_row(rects: &[BorderRect]) -> Vec<Vec<BorderRect>> {
    let mut sorted = rects.to_vec();
    sorted.sort_by(|a, b| a.y1.total_cmp(&b.y1));

    // Equal y1 values are contiguous after the sort, so one pass suffices.
    let mut rows: Vec<Vec<BorderRect>> = Vec::new();
    for rect in sorted {
        match rows.last_mut() {
            Some(row) if row[0].y1.total_cmp(&rect.y1).is_eq() => row.push(rect),
            _ => rows.push(vec![rect]),
        }
    }

    for row in &mut rows {
        row.sort_by(|a, b| a.x1.total_cmp(&b.x1));
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x1: f32, y1: f32) -> BorderRect {
        BorderRect::new(x1, y1, x1 + 10.0, y1 + 10.0)
    }

    #[test]
    fn rows_are_sorted_and_uniform() {
        let rects = vec![
            rect(30.0, 20.0),
            rect(0.0, 0.0),
            rect(10.0, 20.0),
            rect(20.0, 0.0),
            rect(5.0, 10.0),
        ];
        let rows = group_by_row(&rects);

        assert_eq!(rows.len(), 3);
        let mut prev_y = f32::NEG_INFINITY;
        for row in &rows {
            assert!(row[0].y1 >= prev_y);
            prev_y = row[0].y1;
            let mut prev_x = f32::NEG_INFINITY;
            for r in row {
                assert_eq!(r.y1, row[0].y1);
                assert!(r.x1 >= prev_x);
                prev_x = r.x1;
            }
        }
    }

    #[test]
    fn grouping_preserves_every_rectangle() {
        let rects = vec![rect(1.0, 5.0), rect(0.0, 5.0), rect(2.0, 1.0)];
        let rows = group_by_row(&rects);

        let total: usize = rows.iter().map(Vec::len).sum();
        assert_eq!(total, rects.len());
        for r in &rects {
            assert!(rows.iter().flatten().any(|g| g == r));
        }
    }

    #[test]
    fn grouping_does_not_mutate_input() {
        let rects = vec![rect(9.0, 9.0), rect(0.0, 0.0)];
        let before = rects.clone();
        let _ = group_by_row(&rects);
        assert_eq!(rects, before);
    }

    #[test]
    fn regrouping_flattened_output_is_identity() {
        let rects = vec![
            rect(7.0, 3.0),
            rect(1.0, 3.0),
            rect(4.0, 0.0),
            rect(4.0, 8.0),
        ];
        let rows = group_by_row(&rects);
        let flattened: Vec<BorderRect> = rows.iter().flatten().cloned().collect();
        assert_eq!(group_by_row(&flattened), rows);
    }

    #[test]
    fn single_rectangle_forms_one_row() {
        let rows = group_by_row(&[rect(0.0, 0.0)]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 1);
    }

    #[test]
    fn empty_input_yields_no_rows() {
        assert!(group_by_row(&[]).is_empty());
    }
}
