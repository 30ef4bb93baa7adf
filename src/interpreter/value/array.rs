use std::{cell::RefCell, cmp::Ordering, fmt, rc::Rc};

use crate::interpreter::value::core::Value;

/// A mutable, fixed-length sequence of values shared by reference.
///
/// Cloning an `Array` clones the handle, not the elements: every clone
/// observes writes made through any other. An N-dimensional array is a 1-D
/// array whose elements are arrays of rank N-1.
///
/// The nesting depth is computed once, when the array is built. Elements
/// replaced through [`Array::set`] never hold arrays, so it stays exact.
///
/// # Example
/// ```
/// use aslang::interpreter::value::{array::Array, core::Value};
///
/// let grid = Array::zeroed(&[2, 3]);
/// let alias = grid.clone();
///
/// if let Some(Value::Array(row)) = grid.get(1) {
///     row.set(2, Value::from(7));
/// }
///
/// assert_eq!(alias.depth(), 2);
/// assert_eq!(alias.to_string(), "[[0, 0, 0], [0, 0, 7]]");
/// ```
#[derive(Debug, Clone)]
pub struct Array {
    items: Rc<RefCell<Vec<Value>>>,
    depth: usize,
}

impl Array {
    /// Wraps `items` in a new shared array.
    #[must_use]
    pub fn new(items: Vec<Value>) -> Self {
        let inner = items.iter()
                         .filter_map(|item| match item {
                             Value::Array(array) => Some(array.depth),
                             _ => None,
                         })
                         .max()
                         .unwrap_or(0);

        Self { items: Rc::new(RefCell::new(items)),
               depth: inner + 1 }
    }

    /// Builds a nested array of the given shape with `0` at every leaf.
    ///
    /// Every row is a distinct array, so writing one leaf never affects
    /// another. An empty shape yields an empty array.
    #[must_use]
    pub fn zeroed(dims: &[usize]) -> Self {
        let Some((&len, rest)) = dims.split_first() else {
            return Self::default();
        };

        let items = if rest.is_empty() {
            vec![Value::from(0); len]
        } else {
            (0..len).map(|_| Value::Array(Self::zeroed(rest))).collect()
        };
        Self::new(items)
    }

    /// How many arrays deep the deepest element sits, counting this one.
    ///
    /// A flat array has depth 1. Unlike the shape of a zero-filled array,
    /// this covers ragged lists such as `[1, [[2]]]` (depth 3).
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Number of elements in the outermost dimension.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    /// Returns `true` if the array has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Returns the element at `index`. Nested arrays come back as shared
    /// handles.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Value> {
        self.items.borrow().get(index).cloned()
    }

    /// Replaces the element at `index`, returning the previous element, or
    /// `None` if `index` is out of range.
    pub fn set(&self, index: usize, value: Value) -> Option<Value> {
        debug_assert!(!matches!(value, Value::Array(_)), "array elements never hold arrays");
        self.items
            .borrow_mut()
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, value))
    }

    /// Returns `true` if both handles refer to the same storage.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.items, &other.items)
    }

    /// Copies the elements of the outermost dimension.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Value> {
        self.items.borrow().clone()
    }

    /// Orders two arrays lexicographically, element by element.
    ///
    /// Returns `None` as soon as a pair of elements is unordered.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        if self.ptr_eq(other) {
            return Some(Ordering::Equal);
        }

        let left = self.items.borrow();
        let right = other.items.borrow();
        for (a, b) in left.iter().zip(right.iter()) {
            match a.compare(b)? {
                Ordering::Equal => {},
                unequal => return Some(unequal),
            }
        }
        Some(left.len().cmp(&right.len()))
    }
}

impl Default for Array {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.items.borrow() == *other.items.borrow()
    }
}

impl From<Vec<Value>> for Array {
    fn from(items: Vec<Value>) -> Self {
        Self::new(items)
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, item) in self.items.borrow().iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            match item {
                Value::Text(text) => write!(f, "'{text}'")?,
                other => write!(f, "{other}")?,
            }
        }
        write!(f, "]")
    }
}
