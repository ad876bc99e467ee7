use core::fmt;

/// A value that must be read with volatile loads.
///
/// `Volatile<T>` has the same layout as `T`, so a pointer to `T` reinterpreted as a
/// pointer to `Volatile<T>` addresses the same bits. That makes "add volatile" a
/// representation-preserving conversion for views of pointers, the same way
/// `*mut T` to `*const T` adds read-only-ness.
///
/// ```
/// use melbi_array_ref::Volatile;
///
/// let cell = Volatile::new(7u32);
/// assert_eq!(cell.read(), 7);
/// ```
#[repr(transparent)]
#[derive(Default)]
pub struct Volatile<T>(T);

static_assertions::assert_eq_size!(Volatile<u64>, u64);
static_assertions::assert_eq_align!(Volatile<u64>, u64);

impl<T> Volatile<T> {
    pub const fn new(value: T) -> Self {
        Volatile(value)
    }

    pub fn into_inner(self) -> T {
        self.0
    }

    /// Returns the raw pointer to the wrapped value.
    pub const fn as_ptr(&self) -> *const T {
        &self.0
    }
}

impl<T: Copy> Volatile<T> {
    /// Reads the value with a volatile load.
    #[inline]
    pub fn read(&self) -> T {
        // SAFETY: `self.0` is a valid, aligned, initialized `T` borrowed for the
        // duration of this call.
        unsafe { core::ptr::read_volatile(&self.0) }
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for Volatile<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Volatile").field(&self.read()).finish()
    }
}

impl<T> From<T> for Volatile<T> {
    fn from(value: T) -> Self {
        Volatile(value)
    }
}
