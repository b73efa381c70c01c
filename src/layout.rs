use crate::error::{LayoutError, Result};
use crate::hypothesis::Hypothesis;
use crate::variable::{get_variable_size, Variable};
use nalgebra::{DVectorView, DVectorViewMut};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    variable: Variable,
    offset: usize,
    size: usize,
}

/// Layout of a sequence of variables in a per integration point buffer.
///
/// The layout is computed once. Names must be unique, duplicates are
/// rejected by [`VariableLayout::new`].
///
/// A buffer covering several integration points stores them one after the
/// other, each block holding `array_size()` scalars:
/// `[ip 0 | ip 1 | ...]`.
#[derive(Debug, Clone)]
pub struct VariableLayout {
    hypothesis: Hypothesis,
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
    array_size: usize,
}

impl VariableLayout {
    pub fn new(variables: &[Variable], hypothesis: Hypothesis) -> Result<Self> {
        let mut entries = Vec::with_capacity(variables.len());
        let mut index = HashMap::with_capacity(variables.len());
        let mut offset = 0;
        for variable in variables {
            if index.insert(variable.name().to_string(), entries.len()).is_some() {
                log::warn!("duplicate variable '{}' in layout", variable.name());
                return Err(LayoutError::DuplicateVariable {
                    name: variable.name().to_string(),
                });
            }
            let size = get_variable_size(variable, hypothesis);
            entries.push(Entry {
                variable: variable.clone(),
                offset,
                size,
            });
            offset += size;
        }
        log::debug!(
            "layout of {} variables under {}: array size {}",
            entries.len(),
            hypothesis,
            offset
        );
        Ok(Self {
            hypothesis,
            entries,
            index,
            array_size: offset,
        })
    }

    pub fn hypothesis(&self) -> Hypothesis {
        self.hypothesis
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of scalars stored per integration point.
    pub fn array_size(&self) -> usize {
        self.array_size
    }

    pub fn variables(&self) -> impl Iterator<Item = &Variable> + '_ {
        self.entries.iter().map(|e| &e.variable)
    }

    /// `(name, offset, size)` for each variable, in layout order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, usize, usize)> + '_ {
        self.entries
            .iter()
            .map(|e| (e.variable.name(), e.offset, e.size))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    fn entry(&self, name: &str) -> Result<&Entry> {
        self.index
            .get(name)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| LayoutError::not_found(name))
    }

    pub fn offset(&self, name: &str) -> Result<usize> {
        self.entry(name).map(|e| e.offset)
    }

    pub fn size(&self, name: &str) -> Result<usize> {
        self.entry(name).map(|e| e.size)
    }

    /// Number of integration points held by a buffer of `buffer_len` scalars.
    pub fn n_integration_points(&self, buffer_len: usize) -> Result<usize> {
        if self.array_size == 0 {
            return if buffer_len == 0 {
                Ok(0)
            } else {
                Err(LayoutError::BufferSizeMismatch {
                    buffer_len,
                    array_size: 0,
                })
            };
        }
        if buffer_len % self.array_size != 0 {
            return Err(LayoutError::BufferSizeMismatch {
                buffer_len,
                array_size: self.array_size,
            });
        }
        Ok(buffer_len / self.array_size)
    }

    /// Range of `buffer` holding `name` at integration point `ip`.
    fn range(&self, buffer_len: usize, name: &str, ip: usize) -> Result<(usize, usize)> {
        let entry = self.entry(name)?;
        let n = self.n_integration_points(buffer_len)?;
        if ip >= n {
            return Err(LayoutError::IntegrationPointOutOfRange {
                ip,
                n_integration_points: n,
            });
        }
        let start = ip * self.array_size + entry.offset;
        Ok((start, start + entry.size))
    }

    pub fn view<'a>(&self, buffer: &'a [f64], name: &str, ip: usize) -> Result<DVectorView<'a, f64>> {
        let (start, end) = self.range(buffer.len(), name, ip)?;
        Ok(DVectorView::from_slice(&buffer[start..end], end - start))
    }

    pub fn view_mut<'a>(
        &self,
        buffer: &'a mut [f64],
        name: &str,
        ip: usize,
    ) -> Result<DVectorViewMut<'a, f64>> {
        let (start, end) = self.range(buffer.len(), name, ip)?;
        Ok(DVectorViewMut::from_slice(&mut buffer[start..end], end - start))
    }
}
