use super::StableKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Treatment {
    Limpieza,
    Caries,
    Ortodoncia,
    Blanqueamiento,
}

impl Treatment {
    pub const ALL: [Treatment; 4] = [
        Treatment::Limpieza,
        Treatment::Caries,
        Treatment::Ortodoncia,
        Treatment::Blanqueamiento,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Treatment::Limpieza => "limpieza",
            Treatment::Caries => "caries",
            Treatment::Ortodoncia => "ortodoncia",
            Treatment::Blanqueamiento => "blanqueamiento",
        }
    }
}

impl StableKey for Treatment {
    fn key(&self) -> &'static str {
        self.as_str()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Urgency {
    Baja,
    Media,
    Alta,
    Emergencia,
}

impl Urgency {
    pub const ALL: [Urgency; 4] = [
        Urgency::Baja,
        Urgency::Media,
        Urgency::Alta,
        Urgency::Emergencia,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Baja => "baja",
            Urgency::Media => "media",
            Urgency::Alta => "alta",
            Urgency::Emergencia => "emergencia",
        }
    }
}

impl StableKey for Urgency {
    fn key(&self) -> &'static str {
        self.as_str()
    }
}
