use core::any::TypeId;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use om_utils::TypeIdMap;

use crate::error::MappingError;
use crate::info::TypePath;
use crate::mapper::{ObjectMapper, ObjectMetadata};
use crate::Assemble;

type Built = Result<Arc<ObjectMetadata>, MappingError>;
type MetadataCell = OnceLock<Built>;

/// Per-type cache of [`ObjectMetadata`].
///
/// The first request for a type runs its
/// [`declare_mapping`](Assemble::declare_mapping) and stores the result;
/// later requests reuse it. A failed declaration is cached too.
///
/// # Lifecycle
///
/// - [`global`](Self::global) is created empty at first use and lives for
///   the whole process. The [`Assemble`] convenience methods use it.
/// - Any number of separate registries can be created with
///   [`new`](Self::new), e.g. for isolated tests.
/// - [`invalidate`](Self::invalidate) and [`clear`](Self::clear) drop cached
///   entries so the next request declares the mapping again. Metadata already
///   handed out stays valid.
///
/// # Concurrency
///
/// The `TypeId -> cell` map sits behind an [`RwLock`] that is only written
/// to insert a new cell. Each cell is a [`OnceLock`], so a mapping is
/// declared at most once per cell even under concurrent first use, and
/// never while the map lock is held.
///
/// # Examples
///
/// ```
/// use om_object::derive::Object;
/// use om_object::mapper::ObjectMapper;
/// use om_object::registry::MetadataRegistry;
/// use om_object::{Assemble, MappingError};
///
/// #[derive(Object, Default)]
/// struct User {
///     id: i64,
/// }
///
/// impl Assemble for User {
///     fn declare_mapping(m: &mut ObjectMapper) -> Result<(), MappingError> {
///         m.select(["id"]).as_integer();
///         Ok(())
///     }
/// }
///
/// let registry = MetadataRegistry::new();
/// assert!(!registry.contains::<User>());
///
/// let metadata = registry.get::<User>().unwrap();
/// assert!(metadata.contains("id"));
/// assert!(registry.contains::<User>());
///
/// assert!(registry.invalidate::<User>());
/// assert!(!registry.contains::<User>());
/// ```
pub struct MetadataRegistry {
    cells: RwLock<TypeIdMap<Arc<MetadataCell>>>,
}

impl MetadataRegistry {
    /// Creates an empty registry.
    #[inline]
    pub const fn new() -> Self {
        Self {
            cells: RwLock::new(TypeIdMap::new()),
        }
    }

    /// Returns the process-wide registry.
    #[inline]
    pub fn global() -> &'static Self {
        static GLOBAL: MetadataRegistry = MetadataRegistry::new();
        &GLOBAL
    }

    fn cell(&self, type_id: TypeId) -> Arc<MetadataCell> {
        let cells = self.cells.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(cell) = cells.get(&type_id) {
            return cell.clone();
        }
        drop(cells);

        let mut cells = self.cells.write().unwrap_or_else(PoisonError::into_inner);
        cells.get_or_insert_with(type_id, Default::default).clone()
    }

    /// Returns the metadata of `T`, declaring it on first use.
    ///
    /// # Errors
    ///
    /// Returns the error of `T::declare_mapping`, on this and every later
    /// call until the entry is invalidated.
    pub fn get<T: Assemble>(&self) -> Result<Arc<ObjectMetadata>, MappingError> {
        self.cell(TypeId::of::<T>())
            .get_or_init(Self::build::<T>)
            .clone()
    }

    fn build<T: Assemble>() -> Built {
        let mut mapper = ObjectMapper::new();
        T::declare_mapping(&mut mapper)?;
        let metadata = mapper.into_metadata();
        log::debug!(
            "declared field mapping of `{}`: {} field(s)",
            T::type_path(),
            metadata.len(),
        );
        Ok(Arc::new(metadata))
    }

    /// Declares the mapping of `T` now instead of on first use.
    #[inline]
    pub fn prepare<T: Assemble>(&self) -> Result<(), MappingError> {
        self.get::<T>().map(drop)
    }

    /// Returns `true` if the metadata of `T` has been declared.
    pub fn contains<T: 'static>(&self) -> bool {
        let cells = self.cells.read().unwrap_or_else(PoisonError::into_inner);
        cells
            .get(&TypeId::of::<T>())
            .is_some_and(|cell| cell.get().is_some())
    }

    /// Drops the cached metadata of `T`. Returns `true` if there was any.
    pub fn invalidate<T: TypePath>(&self) -> bool {
        let removed = self
            .cells
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove_type::<T>();
        let declared = removed.is_some_and(|cell| cell.get().is_some());
        if declared {
            log::debug!("invalidated field mapping of `{}`", T::type_path());
        }
        declared
    }

    /// Drops every cached entry.
    pub fn clear(&self) {
        self.cells
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        log::debug!("cleared metadata registry");
    }

    /// Returns the number of declared types.
    pub fn len(&self) -> usize {
        let cells = self.cells.read().unwrap_or_else(PoisonError::into_inner);
        cells.values().filter(|cell| cell.get().is_some()).count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Declares the mappings of every type marked `#[object(auto_register)]`.
    ///
    /// Repeated calls are cheap: types already declared are skipped.
    ///
    /// ## Return Value
    ///
    /// Returns `true` if automatic registration works on the current
    /// platform, otherwise `false`.
    ///
    /// ## Feature Dependency
    ///
    /// Requires the `auto_register` feature; without it this does nothing and
    /// returns `false`. Platform support follows the `inventory` crate.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use om_object::derive::Object;
    /// use om_object::mapper::ObjectMapper;
    /// use om_object::registry::MetadataRegistry;
    /// use om_object::{Assemble, MappingError};
    ///
    /// #[derive(Object, Default)]
    /// #[object(auto_register)]
    /// struct Order {
    ///     total: f64,
    /// }
    ///
    /// impl Assemble for Order {
    ///     fn declare_mapping(m: &mut ObjectMapper) -> Result<(), MappingError> {
    ///         m.select(["total"]).as_float();
    ///         Ok(())
    ///     }
    /// }
    ///
    /// let registry = MetadataRegistry::new();
    /// assert!(registry.auto_register());
    /// assert!(registry.contains::<Order>());
    /// ```
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            let available = crate::__macro_exports::auto_register::__register_types(self);
            if !available {
                log::warn!("auto registration is not supported on this platform");
            }
            available
        }
        #[cfg(not(feature = "auto_register"))]
        {
            log::warn!("`MetadataRegistry::auto_register` requires the `auto_register` feature");
            false
        }
    }
}

impl Default for MetadataRegistry {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// Tests
