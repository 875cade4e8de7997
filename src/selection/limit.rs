use crate::selection::Scored;

pub struct LimitResult<'a, T, D> {
    pub selected: Vec<Scored<'a, T, D>>,
    pub excluded_by_limit: usize,
}

/// Keep the first `limit` ranked entries; `None` keeps everything.
pub fn apply_limit<'a, T, D>(ranked: Vec<Scored<'a, T, D>>, limit: Option<usize>) -> LimitResult<'a, T, D> {
    let mut selected = ranked;
    let mut excluded_by_limit = 0;

    if let Some(limit) = limit {
        if selected.len() > limit {
            excluded_by_limit = selected.len() - limit;
            selected.truncate(limit);
        }
    }

    LimitResult {
        selected,
        excluded_by_limit,
    }
}
