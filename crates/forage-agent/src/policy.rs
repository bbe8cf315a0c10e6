use crate::actuation::ActionVector;
use crate::observation::Observation;

/// Source of actions: a trained model, a script, or a human.
pub trait Policy {
    fn decide(&mut self, observation: &Observation) -> ActionVector;
}

impl<P: Policy + ?Sized> Policy for Box<P> {
    fn decide(&mut self, observation: &Observation) -> ActionVector {
        (**self).decide(observation)
    }
}

/// Adapts a closure into a [`Policy`].
pub struct FnPolicy<F> {
    f: F,
}

impl<F> FnPolicy<F>
where
    F: FnMut(&Observation) -> ActionVector,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> Policy for FnPolicy<F>
where
    F: FnMut(&Observation) -> ActionVector,
{
    fn decide(&mut self, observation: &Observation) -> ActionVector {
        (self.f)(observation)
    }
}

/// Always returns the idle action.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdlePolicy;

impl Policy for IdlePolicy {
    fn decide(&mut self, _observation: &Observation) -> ActionVector {
        ActionVector::idle()
    }
}
