//! Embedded display strings. Adding a key means adding it to every bundle;
//! the key-set test in the parent module enforces that.

use super::{Labels, LocalizationBundle};
use crate::models::{BookingStatus, Treatment, Urgency};

pub(super) static ES: LocalizationBundle = LocalizationBundle {
    flag: "🇪🇸",
    title: "Reservar Cita Dental",
    patient_name: "Nombre del paciente",
    email: "Correo electrónico",
    phone: "Teléfono",
    treatment: "Tratamiento",
    urgency: "Urgencia",
    preferred_date: "Fecha preferida",
    preferred_time: "Hora preferida",
    medical_history: "Historial médico",
    notes: "Notas adicionales",
    submit: "Reservar",
    cancel: "Limpiar",
    required: "Obligatorio",
    email_invalid: "Correo no válido",
    phone_invalid: "Teléfono no válido",
    treatments: Labels::new([
        (Treatment::Limpieza, "Limpieza"),
        (Treatment::Caries, "Empaste / Caries"),
        (Treatment::Ortodoncia, "Ortodoncia"),
        (Treatment::Blanqueamiento, "Blanqueamiento"),
    ]),
    urgency_levels: Labels::new([
        (Urgency::Baja, "Baja"),
        (Urgency::Media, "Media"),
        (Urgency::Alta, "Alta"),
        (Urgency::Emergencia, "Emergencia"),
    ]),
    dashboard: "Reservas",
    search: "Buscar…",
    all: "Todas",
    pending: "Pendiente",
    confirmed: "Confirmada",
    completed: "Completada",
    cancelled: "Cancelada",
    status: Labels::new([
        (BookingStatus::Pendiente, "Pendiente"),
        (BookingStatus::Confirmada, "Confirmada"),
        (BookingStatus::Completada, "Completada"),
        (BookingStatus::Cancelada, "Cancelada"),
    ]),
    toast_success: "Reserva creada correctamente",
};

pub(super) static EN: LocalizationBundle = LocalizationBundle {
    flag: "🇺🇸",
    title: "Book Dental Appointment",
    patient_name: "Patient name",
    email: "Email",
    phone: "Phone",
    treatment: "Treatment",
    urgency: "Urgency",
    preferred_date: "Preferred date",
    preferred_time: "Preferred time",
    medical_history: "Medical history",
    notes: "Additional notes",
    submit: "Book",
    cancel: "Clear",
    required: "Required",
    email_invalid: "Invalid email",
    phone_invalid: "Invalid phone",
    treatments: Labels::new([
        (Treatment::Limpieza, "Cleaning"),
        (Treatment::Caries, "Filling / Caries"),
        (Treatment::Ortodoncia, "Orthodontics"),
        (Treatment::Blanqueamiento, "Whitening"),
    ]),
    urgency_levels: Labels::new([
        (Urgency::Baja, "Low"),
        (Urgency::Media, "Medium"),
        (Urgency::Alta, "High"),
        (Urgency::Emergencia, "Emergency"),
    ]),
    dashboard: "Bookings",
    search: "Search…",
    all: "All",
    pending: "Pending",
    confirmed: "Confirmed",
    completed: "Completed",
    cancelled: "Cancelled",
    status: Labels::new([
        (BookingStatus::Pendiente, "Pending"),
        (BookingStatus::Confirmada, "Confirmed"),
        (BookingStatus::Completada, "Completed"),
        (BookingStatus::Cancelada, "Cancelled"),
    ]),
    toast_success: "Booking created successfully",
};

pub(super) static FR: LocalizationBundle = LocalizationBundle {
    flag: "🇫🇷",
    title: "Prendre un Rendez-vous Dentaire",
    patient_name: "Nom du patient",
    email: "E-mail",
    phone: "Téléphone",
    treatment: "Traitement",
    urgency: "Urgence",
    preferred_date: "Date préférée",
    preferred_time: "Heure préférée",
    medical_history: "Historique médical",
    notes: "Notes supplémentaires",
    submit: "Réserver",
    cancel: "Effacer",
    required: "Obligatoire",
    email_invalid: "E-mail invalide",
    phone_invalid: "Téléphone invalide",
    treatments: Labels::new([
        (Treatment::Limpieza, "Détartrage"),
        (Treatment::Caries, "Caries / Plombage"),
        (Treatment::Ortodoncia, "Orthodontie"),
        (Treatment::Blanqueamiento, "Blanchiment"),
    ]),
    urgency_levels: Labels::new([
        (Urgency::Baja, "Basse"),
        (Urgency::Media, "Moyenne"),
        (Urgency::Alta, "Élevée"),
        (Urgency::Emergencia, "Urgence"),
    ]),
    dashboard: "Réservations",
    search: "Rechercher…",
    all: "Toutes",
    pending: "En attente",
    confirmed: "Confirmée",
    completed: "Terminée",
    cancelled: "Annulée",
    status: Labels::new([
        (BookingStatus::Pendiente, "En attente"),
        (BookingStatus::Confirmada, "Confirmée"),
        (BookingStatus::Completada, "Terminée"),
        (BookingStatus::Cancelada, "Annulée"),
    ]),
    toast_success: "Réservation créée avec succès",
};

pub(super) static DE: LocalizationBundle = LocalizationBundle {
    flag: "🇩🇪",
    title: "Zahnarzttermin Buchen",
    patient_name: "Patientenname",
    email: "E-Mail",
    phone: "Telefon",
    treatment: "Behandlung",
    urgency: "Dringlichkeit",
    preferred_date: "Bevorzugtes Datum",
    preferred_time: "Bevorzugte Uhrzeit",
    medical_history: "Medizinische Vorgeschichte",
    notes: "Zusätzliche Notizen",
    submit: "Buchen",
    cancel: "Leeren",
    required: "Pflichtfeld",
    email_invalid: "Ungültige E-Mail",
    phone_invalid: "Ungültige Telefonnummer",
    treatments: Labels::new([
        (Treatment::Limpieza, "Reinigung"),
        (Treatment::Caries, "Füllung / Karies"),
        (Treatment::Ortodoncia, "Kieferorthopädie"),
        (Treatment::Blanqueamiento, "Bleaching"),
    ]),
    urgency_levels: Labels::new([
        (Urgency::Baja, "Niedrig"),
        (Urgency::Media, "Mittel"),
        (Urgency::Alta, "Hoch"),
        (Urgency::Emergencia, "Notfall"),
    ]),
    dashboard: "Buchungen",
    search: "Suchen…",
    all: "Alle",
    pending: "Ausstehend",
    confirmed: "Bestätigt",
    completed: "Abgeschlossen",
    cancelled: "Abgesagt",
    status: Labels::new([
        (BookingStatus::Pendiente, "Ausstehend"),
        (BookingStatus::Confirmada, "Bestätigt"),
        (BookingStatus::Completada, "Abgeschlossen"),
        (BookingStatus::Cancelada, "Abgesagt"),
    ]),
    toast_success: "Buchung erfolgreich erstellt",
};

pub(super) static IT: LocalizationBundle = LocalizationBundle {
    flag: "🇮🇹",
    title: "Prenota Visita Dentistica",
    patient_name: "Nome paziente",
    email: "E-mail",
    phone: "Telefono",
    treatment: "Trattamento",
    urgency: "Urgenza",
    preferred_date: "Data preferita",
    preferred_time: "Ora preferita",
    medical_history: "Storia medica",
    notes: "Note aggiuntive",
    submit: "Prenota",
    cancel: "Cancella",
    required: "Obbligatorio",
    email_invalid: "E-mail non valida",
    phone_invalid: "Telefono non valido",
    treatments: Labels::new([
        (Treatment::Limpieza, "Pulizia"),
        (Treatment::Caries, "Otturazione / Carie"),
        (Treatment::Ortodoncia, "Ortodonzia"),
        (Treatment::Blanqueamiento, "Sbiancamento"),
    ]),
    urgency_levels: Labels::new([
        (Urgency::Baja, "Bassa"),
        (Urgency::Media, "Media"),
        (Urgency::Alta, "Alta"),
        (Urgency::Emergencia, "Emergenza"),
    ]),
    dashboard: "Prenotazioni",
    search: "Cerca…",
    all: "Tutte",
    pending: "In attesa",
    confirmed: "Confermata",
    completed: "Completata",
    cancelled: "Annullata",
    status: Labels::new([
        (BookingStatus::Pendiente, "In attesa"),
        (BookingStatus::Confirmada, "Confermata"),
        (BookingStatus::Completada, "Completata"),
        (BookingStatus::Cancelada, "Annullata"),
    ]),
    toast_success: "Prenotazione creata con successo",
};
