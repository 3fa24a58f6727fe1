//! Transform component
//!
//! The 2D transform type from `foundation::math` is used directly as the
//! component so that systems and physics share one representation.

use crate::ecs::Component;
pub use crate::foundation::math::Transform2D;

impl Component for Transform2D {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::EntityStore;
    use crate::foundation::math::Vec2;

    #[test]
    fn test_transform_attaches_to_entity() {
        let mut store = EntityStore::new();
        let entity = store.create_entity();
        store.add_component(entity, Transform2D::from_position(Vec2::new(3.0, 4.0)));

        let transform = store.get_component::<Transform2D>(entity).unwrap();
        assert_eq!(transform.position, Vec2::new(3.0, 4.0));
        assert_eq!(transform.scale, Vec2::new(1.0, 1.0));
    }
}
