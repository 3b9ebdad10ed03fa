//! Type-constructor markers.
//!
//! Rust cannot name a generic type without its arguments, so each
//! constructor is represented by a unit marker. `Vec<u8>` specializes
//! [`Vec`], `(u8, char)` specializes [`Tuple`], and so on.

#[derive(Debug, Clone, Copy, Default)]
pub struct Tuple;

#[derive(Debug, Clone, Copy, Default)]
pub struct Option;

#[derive(Debug, Clone, Copy, Default)]
pub struct Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct Vec;

#[derive(Debug, Clone, Copy, Default)]
pub struct VecDeque;

#[derive(Debug, Clone, Copy, Default)]
pub struct LinkedList;

#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryHeap;

#[derive(Debug, Clone, Copy, Default)]
pub struct Box;

#[derive(Debug, Clone, Copy, Default)]
pub struct Rc;

#[derive(Debug, Clone, Copy, Default)]
pub struct Arc;

#[derive(Debug, Clone, Copy, Default)]
pub struct Cell;

#[derive(Debug, Clone, Copy, Default)]
pub struct RefCell;

#[derive(Debug, Clone, Copy, Default)]
pub struct HashMap;

#[derive(Debug, Clone, Copy, Default)]
pub struct HashSet;

#[derive(Debug, Clone, Copy, Default)]
pub struct BTreeMap;

#[derive(Debug, Clone, Copy, Default)]
pub struct BTreeSet;

#[derive(Debug, Clone, Copy, Default)]
pub struct PhantomData;
