//! Timeline orchestration for many animatable properties
//!
//! A [`Timeline`] is the coordinator a scene hands every animatable
//! property to. Setting the timeline's play time fans the same time out to
//! each registered property, whatever its value kind.

use crate::evaluator::Animatable;
use crate::property::AnimatableProperty;
use crate::segment::TotalDuration;
use slotmap::{new_key_type, SlotMap};
use std::any::Any;
use std::fmt;
use std::marker::PhantomData;

new_key_type! {
    pub struct PropertyId;
}

/// Typed handle to a property registered on a [`Timeline`]
pub struct PropertyKey<V> {
    id: PropertyId,
    _value: PhantomData<fn() -> V>,
}

impl<V> PropertyKey<V> {
    pub fn id(&self) -> PropertyId {
        self.id
    }
}

impl<V> Clone for PropertyKey<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for PropertyKey<V> {}

impl<V> PartialEq for PropertyKey<V> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<V> Eq for PropertyKey<V> {}

impl<V> fmt::Debug for PropertyKey<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PropertyKey").field(&self.id).finish()
    }
}

/// Type-erased view of a registered property
trait TimelineEntry: Send {
    fn seek(&mut self, play_time: u64);
    fn total_duration(&self) -> TotalDuration;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<V: Animatable> TimelineEntry for AnimatableProperty<V> {
    fn seek(&mut self, play_time: u64) {
        AnimatableProperty::seek(self, play_time);
    }

    fn total_duration(&self) -> TotalDuration {
        AnimatableProperty::total_duration(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// A timeline that drives every registered property from one play time
pub struct Timeline {
    properties: SlotMap<PropertyId, Box<dyn TimelineEntry>>,
    current_play_time: u64,
}

impl Timeline {
    pub fn new() -> Self {
        Self {
            properties: SlotMap::with_key(),
            current_play_time: 0,
        }
    }

    /// Register a property and bring it to the timeline's current play time
    pub fn register<V: Animatable>(
        &mut self,
        mut property: AnimatableProperty<V>,
    ) -> PropertyKey<V> {
        property.seek(self.current_play_time);
        let id = self.properties.insert(Box::new(property));
        tracing::debug!(?id, properties = self.properties.len(), "registered property");
        PropertyKey {
            id,
            _value: PhantomData,
        }
    }

    /// Unregister a property, handing it back
    pub fn remove<V: Animatable>(
        &mut self,
        key: PropertyKey<V>,
    ) -> Option<AnimatableProperty<V>> {
        let entry = self.properties.remove(key.id)?;
        tracing::debug!(id = ?key.id, "removed property");
        entry.into_any().downcast().ok().map(|property| *property)
    }

    /// Broadcast a play time to every registered property
    ///
    /// Each property clamps the time to its own range and notifies its
    /// listeners if its clamped time moved.
    pub fn set_current_play_time(&mut self, play_time: i64) {
        self.current_play_time = u64::try_from(play_time).unwrap_or(0);
        tracing::trace!(
            play_time = self.current_play_time,
            properties = self.properties.len(),
            "broadcasting play time"
        );
        for (_, property) in self.properties.iter_mut() {
            property.seek(self.current_play_time);
        }
    }

    pub fn current_play_time(&self) -> u64 {
        self.current_play_time
    }

    /// Longest registered property, `Infinite` if any never ends
    pub fn total_duration(&self) -> TotalDuration {
        self.properties
            .values()
            .map(|property| property.total_duration())
            .max()
            .unwrap_or_default()
    }

    pub fn get<V: Animatable>(&self, key: PropertyKey<V>) -> Option<&AnimatableProperty<V>> {
        self.properties.get(key.id)?.as_any().downcast_ref()
    }

    pub fn get_mut<V: Animatable>(
        &mut self,
        key: PropertyKey<V>,
    ) -> Option<&mut AnimatableProperty<V>> {
        self.properties.get_mut(key.id)?.as_any_mut().downcast_mut()
    }

    /// Current value of a registered property
    pub fn animated_value<V: Animatable>(&mut self, key: PropertyKey<V>) -> Option<&V> {
        self.get_mut(key).map(AnimatableProperty::animated_value)
    }

    /// Get the number of registered properties
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timeline")
            .field("properties", &self.properties.len())
            .field("current_play_time", &self.current_play_time)
            .finish()
    }
}
