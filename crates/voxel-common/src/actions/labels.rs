use super::Action;

impl Action {
    /// Human-readable label for logs and the control panel.
    pub fn label(&self) -> &'static str {
        match self {
            Action::SetFlowSpeed(_) => "Flow Turbulence",
            Action::SetInteractionRadius(_) => "Interaction Radius",
            Action::SetBloomStrength(_) => "Optical Bloom",
            Action::SetParticleSize(_) => "Particle Size",
            Action::SetModelScale(_) => "Number Scale",
            Action::SetColors { .. } => "Colors",
            Action::SetShape(_) => "Current Form",
            Action::UpdateHand(_) => "Hand Update",
        }
    }

    /// Whether this action originates from the vision pipeline rather than
    /// the control panel. Vision updates arrive ~20 times per second and are
    /// kept out of info-level logs.
    pub fn is_vision(&self) -> bool {
        matches!(self, Action::UpdateHand(_))
    }
}
