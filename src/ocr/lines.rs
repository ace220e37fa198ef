use std::iter::{FusedIterator, Peekable};
use std::vec::IntoIter;

use super::*;

pub const DEFAULT_LINE_TOLERANCE: f64 = 15.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Line<'a> {
    fragments: Vec<&'a TextFragment>,
}

impl<'a> Line<'a> {
    pub fn fragments(&self) -> &[&'a TextFragment] {
        &self.fragments
    }

    pub fn text(&self) -> String {
        self.fragments
            .iter()
            .map(|fragment| fragment.text.as_str())
            .collect::<Vec<&str>>()
            .join(" ")
    }

    pub fn y_position(&self) -> f64 {
        self.fragments
            .first()
            .map(|fragment| fragment.bounding_box.y)
            .unwrap_or_default()
    }
}

pub struct LineGroups<'a> {
    sorted: Peekable<IntoIter<&'a TextFragment>>,
    tolerance: f64,
}

pub fn group_lines(fragments: &[TextFragment], tolerance: f64) -> LineGroups<'_> {
    let mut sorted = fragments.iter().collect::<Vec<&TextFragment>>();
    sorted.sort_by(|a, b| a.bounding_box.y.total_cmp(&b.bounding_box.y));

    LineGroups {
        sorted: sorted.into_iter().peekable(),
        tolerance,
    }
}

impl<'a> Iterator for LineGroups<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let anchor = self.sorted.next()?;
        let anchor_y = anchor.bounding_box.y;
        let tolerance = self.tolerance;

        let mut fragments = vec![anchor];
        while let Some(fragment) = self
            .sorted
            .next_if(|candidate| (candidate.bounding_box.y - anchor_y).abs() <= tolerance)
        {
            fragments.push(fragment);
        }

        fragments.sort_by(|a, b| a.bounding_box.x.total_cmp(&b.bounding_box.x));
        Some(Line { fragments })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.sorted.size_hint();
        (0, upper)
    }
}

impl FusedIterator for LineGroups<'_> {}
