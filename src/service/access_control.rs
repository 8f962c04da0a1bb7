//! Tabla declarativa de capacidades por rol. Todas las decisiones de
//! autorización pasan por `can`; los handlers nunca comparan nombres de
//! rol directamente.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    ManageUsers,
    ManageRoles,
    ManageAthletes,
    ManageCoaches,
    ManageCompetitions,
    ManageResults,
    ManageTrainings,
    GeneratePlans,
}

/// Rol → operaciones permitidas. Un rol ausente de la tabla no puede
/// realizar ninguna operación protegida.
const GRANTS: &[(&str, &[Operation])] = &[
    (
        "Administrador",
        &[
            Operation::ManageUsers,
            Operation::ManageRoles,
            Operation::ManageAthletes,
            Operation::ManageCoaches,
            Operation::ManageCompetitions,
            Operation::ManageResults,
            Operation::ManageTrainings,
            Operation::GeneratePlans,
        ],
    ),
    (
        "Entrenador",
        &[
            Operation::ManageAthletes,
            Operation::ManageResults,
            Operation::ManageTrainings,
            Operation::GeneratePlans,
        ],
    ),
    (
        "Organizador",
        &[Operation::ManageCompetitions, Operation::ManageResults],
    ),
];

/// Single authorization decision point. Unknown or missing roles are
/// denied.
pub fn can(rol: Option<&str>, operation: Operation) -> bool {
    let Some(rol) = rol else {
        return false;
    };

    GRANTS
        .iter()
        .find(|(nombre, _)| *nombre == rol)
        .map(|(_, operaciones)| operaciones.contains(&operation))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_administrador_puede_todo() {
        for operation in [
            Operation::ManageUsers,
            Operation::ManageRoles,
            Operation::ManageAthletes,
            Operation::ManageCoaches,
            Operation::ManageCompetitions,
            Operation::ManageResults,
            Operation::ManageTrainings,
            Operation::GeneratePlans,
        ] {
            assert!(can(Some("Administrador"), operation), "{:?}", operation);
        }
    }

    #[test]
    fn test_entrenador_limitado() {
        assert!(can(Some("Entrenador"), Operation::ManageAthletes));
        assert!(can(Some("Entrenador"), Operation::GeneratePlans));
        assert!(!can(Some("Entrenador"), Operation::ManageUsers));
        assert!(!can(Some("Entrenador"), Operation::ManageRoles));
    }

    #[test]
    fn test_rol_desconocido_denegado() {
        assert!(!can(Some("Visitante"), Operation::ManageAthletes));
    }

    #[test]
    fn test_sin_rol_denegado() {
        assert!(!can(None, Operation::ManageAthletes));
    }
}
