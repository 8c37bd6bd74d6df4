use crate::error::{DbLinkError, Result};
use dashmap::DashMap;
use std::any::{Any, TypeId};
use std::sync::Arc;

type AnyArc = Arc<dyn Any + Send + Sync>;

/// Casts a registered implementation into an `Arc<Arc<dyn Trait>>` behind `dyn Any`.
/// Returns `None` when the stored instance is not the expected implementation.
type CasterFn = Arc<dyn Fn(AnyArc) -> Option<AnyArc> + Send + Sync>;

/// Thread-safe dependency injection container.
#[derive(Clone, Default)]
pub struct Container {
    services: DashMap<TypeId, AnyArc>,
    trait_mappings: DashMap<TypeId, TypeId>,
    casters: DashMap<TypeId, CasterFn>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T: 'static + Send + Sync>(&mut self, instance: T) -> &mut Self {
        self.register_arc(Arc::new(instance))
    }

    /// Register an instance the caller keeps a handle to
    pub fn register_arc<T: 'static + Send + Sync>(&mut self, instance: Arc<T>) -> &mut Self {
        self.services.insert(TypeId::of::<T>(), instance);
        self
    }

    pub fn register_trait<Trait, Impl, F>(&mut self, caster_fn: F) -> &mut Self
    where
        Trait: ?Sized + 'static + Send + Sync,
        Impl: 'static + Send + Sync,
        F: Fn(Arc<Impl>) -> Arc<Trait> + 'static + Send + Sync,
    {
        let trait_id = TypeId::of::<Trait>();
        let impl_id = TypeId::of::<Impl>();

        self.trait_mappings.insert(trait_id, impl_id);

        let caster: CasterFn = Arc::new(move |instance: AnyArc| {
            let concrete = instance.downcast::<Impl>().ok()?;
            let trait_obj: Arc<Trait> = caster_fn(concrete);
            Some(Arc::new(trait_obj) as AnyArc)
        });

        self.casters.insert(trait_id, caster);
        self
    }

    pub fn resolve<T: 'static + Send + Sync>(&self) -> Result<Arc<T>> {
        let entry = self
            .services
            .get(&TypeId::of::<T>())
            .ok_or_else(|| DbLinkError::DependencyNotFound {
                type_name: std::any::type_name::<T>().to_string(),
            })?;
        entry
            .value()
            .clone()
            .downcast::<T>()
            .map_err(|_| DbLinkError::DowncastFailed {
                type_name: std::any::type_name::<T>().to_string(),
            })
    }

    pub fn resolve_trait<T: ?Sized + 'static + Send + Sync>(&self) -> Result<Arc<T>> {
        let requested_type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        let caster = self.casters.get(&requested_type_id).ok_or_else(|| {
            DbLinkError::DependencyNotFound {
                type_name: type_name.to_string(),
            }
        })?;

        let impl_type_id = self.trait_mappings.get(&requested_type_id).ok_or_else(|| {
            DbLinkError::DependencyNotFound {
                type_name: format!("No implementation mapping found for trait '{}'", type_name),
            }
        })?;

        let instance = self
            .services
            .get(impl_type_id.value())
            .ok_or_else(|| DbLinkError::DependencyNotFound {
                type_name: format!("Implementation for trait '{}' not registered", type_name),
            })?
            .value()
            .clone();

        let downcast_failed = || DbLinkError::DowncastFailed {
            type_name: type_name.to_string(),
        };

        // The caster hands back Arc<Arc<T>>; clone out the inner Arc<T>.
        let wrapper = (caster.value())(instance)
            .ok_or_else(downcast_failed)?
            .downcast::<Arc<T>>()
            .map_err(|_| downcast_failed())?;
        Ok(wrapper.as_ref().clone())
    }

    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        let type_id = TypeId::of::<T>();
        self.services.contains_key(&type_id) || self.trait_mappings.contains_key(&type_id)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
