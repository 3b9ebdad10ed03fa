use super::ReferenceCategory;
use std::pin::Pin;
use std::rc::Rc;
use std::sync::Arc;

/// The ways a method can receive its enclosing type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReceiverKind {
    Value,
    Ref,
    RefMut,
    Boxed,
    Rc,
    Arc,
    PinRef,
    PinMut,
}

impl ReceiverKind {
    /// Shared access only. `Rc` and `Arc` hand out no `&mut` without
    /// exclusive ownership, so they count as const.
    pub const fn is_const(self) -> bool {
        matches!(self, Self::Ref | Self::PinRef | Self::Rc | Self::Arc)
    }

    pub const fn reference(self) -> ReferenceCategory {
        match self {
            Self::Ref | Self::RefMut | Self::PinRef | Self::PinMut => ReferenceCategory::Borrowed,
            Self::Value | Self::Boxed | Self::Rc | Self::Arc => ReferenceCategory::Owned,
        }
    }
}

/// A parameter type that receives `Cls`.
pub trait Receiver<Cls: ?Sized> {
    const KIND: ReceiverKind;
}

impl<C> Receiver<C> for C {
    const KIND: ReceiverKind = ReceiverKind::Value;
}

impl<C: ?Sized> Receiver<C> for &C {
    const KIND: ReceiverKind = ReceiverKind::Ref;
}

impl<C: ?Sized> Receiver<C> for &mut C {
    const KIND: ReceiverKind = ReceiverKind::RefMut;
}

impl<C: ?Sized> Receiver<C> for Box<C> {
    const KIND: ReceiverKind = ReceiverKind::Boxed;
}

impl<C: ?Sized> Receiver<C> for Rc<C> {
    const KIND: ReceiverKind = ReceiverKind::Rc;
}

impl<C: ?Sized> Receiver<C> for Arc<C> {
    const KIND: ReceiverKind = ReceiverKind::Arc;
}

impl<C: ?Sized> Receiver<C> for Pin<&C> {
    const KIND: ReceiverKind = ReceiverKind::PinRef;
}

impl<C: ?Sized> Receiver<C> for Pin<&mut C> {
    const KIND: ReceiverKind = ReceiverKind::PinMut;
}
