/// The three record kinds the gateway serves. Each value carries the naming
/// a collection's routes, store calls, and response bodies share, so all
/// resources flow through one set of handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Patients,
    Doctors,
    Appointments,
}

impl Resource {
    /// MongoDB collection backing this resource.
    pub fn collection_name(&self) -> &'static str {
        match self {
            Resource::Patients => "patients",
            Resource::Doctors => "doctors",
            Resource::Appointments => "appointments",
        }
    }

    pub fn singular(&self) -> &'static str {
        match self {
            Resource::Patients => "Patient",
            Resource::Doctors => "Doctor",
            Resource::Appointments => "Appointment",
        }
    }

    /// Key under which the assigned identifier is returned on create.
    pub fn id_key(&self) -> &'static str {
        match self {
            Resource::Patients => "patientId",
            Resource::Doctors => "doctorId",
            Resource::Appointments => "appointmentId",
        }
    }

    pub fn created_message(&self) -> &'static str {
        match self {
            Resource::Patients => "Patient added successfully",
            Resource::Doctors => "Doctor added successfully",
            Resource::Appointments => "Appointment booked successfully",
        }
    }
}
