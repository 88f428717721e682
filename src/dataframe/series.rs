use std::cmp::Ordering;

/// A single typed column.
#[derive(Debug, Clone, PartialEq)]
pub enum Series {
    Float64(Vec<f64>),
    Utf8(Vec<String>),
}

impl Series {
    pub fn len(&self) -> usize {
        match self {
            Series::Float64(v) => v.len(),
            Series::Utf8(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_f64(&self) -> Option<&[f64]> {
        match self {
            Series::Float64(v) => Some(v),
            Series::Utf8(_) => None,
        }
    }

    pub fn as_utf8(&self) -> Option<&[String]> {
        match self {
            Series::Utf8(v) => Some(v),
            Series::Float64(_) => None,
        }
    }

    /// Gather the rows at `indices`, in that order.
    pub fn take(&self, indices: &[usize]) -> Series {
        match self {
            Series::Float64(v) => Series::Float64(indices.iter().map(|&i| v[i]).collect()),
            Series::Utf8(v) => Series::Utf8(indices.iter().map(|&i| v[i].clone()).collect()),
        }
    }

    /// Keep the rows whose mask entry is `true`.
    pub fn filter(&self, mask: &[bool]) -> Series {
        match self {
            Series::Float64(v) => Series::Float64(
                v.iter()
                    .zip(mask)
                    .filter_map(|(&val, &keep)| if keep { Some(val) } else { None })
                    .collect(),
            ),
            Series::Utf8(v) => Series::Utf8(
                v.iter()
                    .zip(mask)
                    .filter_map(|(val, &keep)| if keep { Some(val.clone()) } else { None })
                    .collect(),
            ),
        }
    }

    /// Render one cell as text, the way it is written back to CSV.
    pub fn cell_to_string(&self, row: usize) -> String {
        match self {
            Series::Float64(v) if v[row].is_nan() => String::new(),
            Series::Float64(v) => v[row].to_string(),
            Series::Utf8(v) => v[row].clone(),
        }
    }

    /// Row order that sorts this series. The sort is stable, so equal values
    /// keep their original relative order. NaN always goes last.
    pub fn sort_indices(&self, ascending: bool) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.len()).collect();
        match self {
            Series::Float64(values) => {
                indices.sort_by(|&a, &b| compare_f64(values[a], values[b], ascending));
            }
            Series::Utf8(values) => {
                indices.sort_by(|&a, &b| {
                    if ascending {
                        values[a].cmp(&values[b])
                    } else {
                        values[b].cmp(&values[a])
                    }
                });
            }
        }
        indices
    }
}

/// Order two floats with NaN placed after every number in either direction.
pub(crate) fn compare_f64(a: f64, b: f64, ascending: bool) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
            if ascending {
                ord
            } else {
                ord.reverse()
            }
        }
    }
}

impl From<Vec<f64>> for Series {
    fn from(v: Vec<f64>) -> Self {
        Series::Float64(v)
    }
}

impl From<Vec<&str>> for Series {
    fn from(v: Vec<&str>) -> Self {
        Series::Utf8(v.into_iter().map(|s| s.to_string()).collect())
    }
}

impl From<Vec<String>> for Series {
    fn from(v: Vec<String>) -> Self {
        Series::Utf8(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descending_sort_is_stable_and_puts_nan_last() {
        let s = Series::from(vec![0.1, f64::NAN, 0.3, 0.1, 0.3]);
        assert_eq!(s.sort_indices(false), vec![2, 4, 0, 3, 1]);
        assert_eq!(s.sort_indices(true), vec![0, 3, 2, 4, 1]);
    }

    #[test]
    fn take_and_filter() {
        let s = Series::from(vec!["a", "b", "c"]);
        assert_eq!(s.take(&[2, 0]), Series::from(vec!["c", "a"]));
        assert_eq!(s.filter(&[false, true, true]), Series::from(vec!["b", "c"]));
        assert!(s.as_f64().is_none());
    }
}
