use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

pub type SubId = usize;

type Subscriber<T> = Rc<dyn Fn(&T)>;

/// Cloneable handle to an observable value.
///
/// Subscribers run synchronously after each write, once the write has
/// finished, so they are free to read the signal they observe.
pub struct Signal<T: 'static>(Rc<RefCell<Inner<T>>>);

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

struct Inner<T> {
    value: T,
    subs: SmallVec<[Option<Subscriber<T>>; 2]>,
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value,
            subs: SmallVec::new(),
        })))
    }
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.borrow().value.clone()
    }
    pub fn set(&self, v: T)
    where
        T: Clone,
    {
        self.0.borrow_mut().value = v;
        self.notify();
    }
    /// Write `v` and notify only if it differs from the current value.
    /// Returns whether a write happened.
    pub fn set_distinct(&self, v: T) -> bool
    where
        T: Clone + PartialEq,
    {
        {
            let mut inner = self.0.borrow_mut();
            if inner.value == v {
                return false;
            }
            inner.value = v;
        }
        self.notify();
        true
    }
    pub fn update<F: FnOnce(&mut T)>(&self, f: F)
    where
        T: Clone,
    {
        f(&mut self.0.borrow_mut().value);
        self.notify();
    }
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubId {
        let sub: Subscriber<T> = Rc::new(f);
        let mut inner = self.0.borrow_mut();
        if let Some(id) = inner.subs.iter().position(Option::is_none) {
            inner.subs[id] = Some(sub);
            return id;
        }
        inner.subs.push(Some(sub));
        inner.subs.len() - 1
    }
    /// Drop a subscriber. Its id may be handed out again by `subscribe`.
    pub fn unsubscribe(&self, id: SubId) {
        if let Some(slot) = self.0.borrow_mut().subs.get_mut(id) {
            *slot = None;
        }
    }
    pub fn subscriber_count(&self) -> usize {
        self.0.borrow().subs.iter().filter(|s| s.is_some()).count()
    }

    fn notify(&self)
    where
        T: Clone,
    {
        let (value, subs) = {
            let inner = self.0.borrow();
            let subs: SmallVec<[Subscriber<T>; 2]> = inner.subs.iter().flatten().cloned().collect();
            (inner.value.clone(), subs)
        };
        for s in &subs {
            s(&value);
        }
    }
}

pub fn signal<T>(t: T) -> Signal<T> {
    Signal::new(t)
}
