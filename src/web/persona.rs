use std::fmt;

/// Reply-style preset for the auto-reply endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Persona {
    Therapist,
    #[default]
    Friend,
    MotivationalCoach,
}

impl Persona {
    /// Resolve a persona from its wire name. Absent or unknown names fall
    /// back to `Friend`.
    pub fn parse(name: Option<&str>) -> Self {
        match name.map(str::trim) {
            Some("Therapist") => Persona::Therapist,
            Some("Friend") => Persona::Friend,
            Some("Motivational Coach") => Persona::MotivationalCoach,
            _ => Persona::default(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Persona::Therapist => "Therapist",
            Persona::Friend => "Friend",
            Persona::MotivationalCoach => "Motivational Coach",
        }
    }

    /// Style instruction placed at the top of the reply prompt.
    pub fn tone(&self) -> &'static str {
        match self {
            Persona::Therapist => {
                "You are a calm, empathetic therapist. Acknowledge the other person's feelings, \
                 stay supportive and non-judgmental, and gently encourage reflection."
            }
            Persona::Friend => {
                "You are a close, casual friend. Keep it warm, relaxed and natural, \
                 the way you would text someone you know well."
            }
            Persona::MotivationalCoach => {
                "You are an upbeat motivational coach. Be encouraging and energetic, \
                 and nudge the other person toward a positive next step."
            }
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_names() {
        assert_eq!(Persona::parse(Some("Therapist")), Persona::Therapist);
        assert_eq!(Persona::parse(Some("Friend")), Persona::Friend);
        assert_eq!(
            Persona::parse(Some(" Motivational Coach ")),
            Persona::MotivationalCoach
        );
    }

    #[test]
    fn unknown_or_missing_falls_back_to_friend() {
        assert_eq!(Persona::parse(None), Persona::Friend);
        assert_eq!(Persona::parse(Some("Pirate")), Persona::Friend);
        assert_eq!(Persona::parse(Some("")), Persona::Friend);
    }

    #[test]
    fn every_persona_has_its_own_tone() {
        let tones = [
            Persona::Therapist.tone(),
            Persona::Friend.tone(),
            Persona::MotivationalCoach.tone(),
        ];
        assert_ne!(tones[0], tones[1]);
        assert_ne!(tones[1], tones[2]);
        assert_ne!(tones[0], tones[2]);
    }

    #[test]
    fn display_uses_wire_name() {
        assert_eq!(Persona::MotivationalCoach.to_string(), "Motivational Coach");
    }
}
