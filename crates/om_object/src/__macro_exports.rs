//! Items used by `om_object_derive` output. Not public API.

#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use inventory;

    use crate::Assemble;
    use crate::registry::MetadataRegistry;

    /// One `#[object(auto_register)]` type.
    pub struct __AutoRegisterFunc(pub fn(&MetadataRegistry));

    inventory::collect!(__AutoRegisterFunc);

    /// Implemented for every [`Assemble`] type so generated code can name
    /// the registration function.
    pub trait __RegisterType {
        fn __register(registry: &MetadataRegistry);
    }

    impl<T: Assemble> __RegisterType for T {
        fn __register(registry: &MetadataRegistry) {
            if let Err(err) = registry.prepare::<T>() {
                log::warn!("auto registration of `{}` failed: {err}", T::type_path());
            }
        }
    }

    // Always collected, so an empty iteration means the platform lacks support.
    fn __avail_flag(_: &MetadataRegistry) {}

    inventory::submit! { __AutoRegisterFunc(__avail_flag) }

    /// Runs every collected registration. Returns `false` when nothing was
    /// collected at all.
    pub fn __register_types(registry: &MetadataRegistry) -> bool {
        let mut available = false;
        for func in inventory::iter::<__AutoRegisterFunc> {
            (func.0)(registry);
            available = true;
        }
        available
    }
}
