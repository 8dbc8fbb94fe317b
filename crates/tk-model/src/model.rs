//! The owning runtime model: components, markers, observers, stepping.

use std::collections::BTreeMap;

use tk_core::{CableId, Real, RodId};

use crate::components::{CableActuator, RigidLink};
use crate::error::{ModelError, ModelResult};
use crate::marker::Marker;

/// External observer notified on every step and at teardown.
///
/// Observers are attached after assembly (controllers, loggers, data
/// sinks). They are notified exactly once per `advance` call, in
/// attachment order.
pub trait ModelObserver {
    fn on_step(&mut self, dt: Real) {
        let _ = dt;
    }

    fn on_teardown(&mut self) {}
}

/// The assembled runtime result of resolving a structure.
///
/// A model exclusively owns its rigid links, cable actuators, markers, and
/// child models. After assembly the component set is immutable apart from
/// teardown; all later access is by query.
#[derive(Default)]
pub struct Model {
    rigids: Vec<RigidLink>,
    actuators: Vec<CableActuator>,
    markers: Vec<Marker>,
    observers: Vec<Box<dyn ModelObserver>>,
    children: Vec<Model>,
}

impl Model {
    /// Create a new empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a rigid link and return its ID.
    pub fn push_rigid(&mut self, link: RigidLink) -> RodId {
        let id = RodId::from_index(self.rigids.len() as u32);
        self.rigids.push(link);
        id
    }

    /// Take ownership of a cable actuator and return its ID.
    pub fn push_actuator(&mut self, cable: CableActuator) -> CableId {
        let id = CableId::from_index(self.actuators.len() as u32);
        self.actuators.push(cable);
        id
    }

    pub fn rigids(&self) -> &[RigidLink] {
        &self.rigids
    }

    pub fn actuators(&self) -> &[CableActuator] {
        &self.actuators
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn children(&self) -> &[Model] {
        &self.children
    }

    /// Get a rigid link by ID (returns None if ID out of bounds).
    pub fn rigid(&self, id: RodId) -> Option<&RigidLink> {
        self.rigids.get(id.index() as usize)
    }

    /// Get a cable actuator by ID (returns None if ID out of bounds).
    pub fn actuator(&self, id: CableId) -> Option<&CableActuator> {
        self.actuators.get(id.index() as usize)
    }

    /// All rigid links whose tags match `label` (substring rule).
    pub fn rigids_tagged(&self, label: &str) -> Vec<&RigidLink> {
        self.rigids
            .iter()
            .filter(|r| r.tags().matches_label(label))
            .collect()
    }

    /// All cable actuators whose tags match `label` (substring rule).
    pub fn actuators_tagged(&self, label: &str) -> Vec<&CableActuator> {
        self.actuators
            .iter()
            .filter(|c| c.tags().matches_label(label))
            .collect()
    }

    /// IDs of all cable actuators whose tags match `label`.
    pub fn actuator_ids_tagged(&self, label: &str) -> Vec<CableId> {
        self.actuators
            .iter()
            .enumerate()
            .filter(|(_, c)| c.tags().matches_label(label))
            .map(|(i, _)| CableId::from_index(i as u32))
            .collect()
    }

    /// Build named actuator groups by re-querying tags, one entry per label.
    pub fn actuator_groups(&self, labels: &[&str]) -> BTreeMap<String, Vec<CableId>> {
        labels
            .iter()
            .map(|label| (label.to_string(), self.actuator_ids_tagged(label)))
            .collect()
    }

    /// Total mass of all rigid links.
    pub fn total_rigid_mass(&self) -> Real {
        self.rigids.iter().map(RigidLink::mass).sum()
    }

    /// Attach an instrumentation marker to a rigid component.
    pub fn attach_marker(&mut self, marker: Marker) -> ModelResult<()> {
        if marker.body.index() as usize >= self.rigids.len() {
            return Err(ModelError::MarkerBodyOutOfRange {
                body: marker.body,
                len: self.rigids.len(),
            });
        }
        self.markers.push(marker);
        Ok(())
    }

    /// Attach an observer; notification order follows attachment order.
    pub fn attach_observer(&mut self, observer: Box<dyn ModelObserver>) {
        self.observers.push(observer);
    }

    /// Append a child model; ownership transfers to this model.
    pub fn add_child(&mut self, child: Model) {
        self.children.push(child);
    }

    /// Advance one time step.
    ///
    /// Rejects `dt <= 0` without any mutation. Otherwise notifies each
    /// attached observer exactly once, in attachment order, then advances
    /// owned children exactly once. Dynamics themselves live in the
    /// external world; this only drives the notification chain.
    pub fn advance(&mut self, dt: Real) -> ModelResult<()> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(ModelError::InvalidStep { dt });
        }
        for observer in &mut self.observers {
            observer.on_step(dt);
        }
        for child in &mut self.children {
            child.advance(dt)?;
        }
        Ok(())
    }

    /// Release all owned components, notifying observers of teardown first.
    pub fn teardown(&mut self) {
        for observer in &mut self.observers {
            observer.on_teardown();
        }
        for child in &mut self.children {
            child.teardown();
        }
        tracing::debug!(
            rigids = self.rigids.len(),
            actuators = self.actuators.len(),
            "model teardown"
        );
        self.observers.clear();
        self.markers.clear();
        self.children.clear();
        self.actuators.clear();
        self.rigids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{CableConfig, RodConfig};
    use nalgebra::{Point3, Vector3};
    use std::cell::RefCell;
    use std::rc::Rc;
    use tk_structure::TagSet;

    fn rod(tag: &str) -> RigidLink {
        RigidLink::new(
            [Point3::origin(), Point3::new(1.0, 0.0, 0.0)],
            RodConfig::new(0.5, 1.0, 0.5).unwrap(),
            TagSet::from_tag(tag),
        )
    }

    fn cable(tag: &str) -> CableActuator {
        CableActuator::new(
            [Point3::origin(), Point3::new(0.0, 1.0, 0.0)],
            CableConfig::new(1000.0, 10.0, 100.0).unwrap(),
            TagSet::from_tag(tag),
        )
    }

    /// Records every notification for assertion.
    struct Recorder {
        steps: Rc<RefCell<Vec<Real>>>,
        teardowns: Rc<RefCell<u32>>,
    }

    impl ModelObserver for Recorder {
        fn on_step(&mut self, dt: Real) {
            self.steps.borrow_mut().push(dt);
        }

        fn on_teardown(&mut self) {
            *self.teardowns.borrow_mut() += 1;
        }
    }

    #[test]
    fn advance_rejects_non_positive_dt() {
        let steps = Rc::new(RefCell::new(Vec::new()));
        let teardowns = Rc::new(RefCell::new(0));
        let mut model = Model::new();
        model.attach_observer(Box::new(Recorder {
            steps: steps.clone(),
            teardowns: teardowns.clone(),
        }));

        assert!(matches!(
            model.advance(0.0),
            Err(ModelError::InvalidStep { .. })
        ));
        assert!(matches!(
            model.advance(-0.1),
            Err(ModelError::InvalidStep { .. })
        ));
        // No observer was notified
        assert!(steps.borrow().is_empty());
    }

    #[test]
    fn advance_notifies_each_observer_once_in_order() {
        let steps_a = Rc::new(RefCell::new(Vec::new()));
        let steps_b = Rc::new(RefCell::new(Vec::new()));
        let teardowns = Rc::new(RefCell::new(0));
        let mut model = Model::new();
        model.attach_observer(Box::new(Recorder {
            steps: steps_a.clone(),
            teardowns: teardowns.clone(),
        }));
        model.attach_observer(Box::new(Recorder {
            steps: steps_b.clone(),
            teardowns: teardowns.clone(),
        }));

        model.advance(0.01).unwrap();
        assert_eq!(*steps_a.borrow(), vec![0.01]);
        assert_eq!(*steps_b.borrow(), vec![0.01]);
    }

    #[test]
    fn advance_steps_children_once() {
        let steps = Rc::new(RefCell::new(Vec::new()));
        let teardowns = Rc::new(RefCell::new(0));
        let mut child = Model::new();
        child.attach_observer(Box::new(Recorder {
            steps: steps.clone(),
            teardowns: teardowns.clone(),
        }));
        let mut model = Model::new();
        model.add_child(child);

        model.advance(0.001).unwrap();
        model.advance(0.001).unwrap();
        assert_eq!(steps.borrow().len(), 2);
    }

    #[test]
    fn teardown_notifies_then_releases() {
        let steps = Rc::new(RefCell::new(Vec::new()));
        let teardowns = Rc::new(RefCell::new(0));
        let mut model = Model::new();
        model.push_rigid(rod("rod"));
        model.push_actuator(cable("muscle"));
        model.attach_observer(Box::new(Recorder {
            steps,
            teardowns: teardowns.clone(),
        }));

        model.teardown();
        assert_eq!(*teardowns.borrow(), 1);
        assert!(model.rigids().is_empty());
        assert!(model.actuators().is_empty());
        assert!(model.markers().is_empty());
    }

    #[test]
    fn tag_queries_use_substring_rule() {
        let mut model = Model::new();
        model.push_rigid(rod("back bottom rod"));
        model.push_rigid(rod("front top rod"));
        model.push_actuator(cable("outer top muscle"));
        model.push_actuator(cable("outer left muscle"));
        model.push_actuator(cable("inner top muscle"));

        assert_eq!(model.rigids_tagged("rod").len(), 2);
        assert_eq!(model.rigids_tagged("back").len(), 1);
        assert_eq!(model.rigids_tagged("muscle").len(), 0);

        assert_eq!(model.actuators_tagged("muscle").len(), 3);
        assert_eq!(model.actuators_tagged("outer").len(), 2);
        assert_eq!(model.actuators_tagged("top muscle").len(), 2);
        assert_eq!(model.actuators_tagged("winch").len(), 0);

        let groups = model.actuator_groups(&["outer", "inner"]);
        assert_eq!(groups["outer"].len(), 2);
        assert_eq!(groups["inner"].len(), 1);
    }

    #[test]
    fn markers_validate_their_body() {
        let mut model = Model::new();
        let body = model.push_rigid(rod("rod"));
        assert!(
            model
                .attach_marker(Marker::new(body, Vector3::zeros(), Vector3::x(), 0))
                .is_ok()
        );

        let bogus = RodId::from_index(9);
        assert!(matches!(
            model.attach_marker(Marker::new(bogus, Vector3::zeros(), Vector3::x(), 1)),
            Err(ModelError::MarkerBodyOutOfRange { .. })
        ));
    }
}
