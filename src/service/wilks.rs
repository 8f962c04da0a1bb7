//! Puntaje Wilks: normaliza el total levantado por el peso corporal.

/// Coeficientes del polinomio masculino (a + b·x + c·x² + d·x³ + e·x⁴ + f·x⁵)
const MASCULINO: [f64; 6] = [
    -216.0475144,
    16.2606339,
    -0.002388645,
    -0.000007141,
    0.00000001291,
    -0.000000000000302,
];

/// Coeficientes del polinomio femenino
const FEMENINO: [f64; 6] = [
    594.31747775582,
    -27.23842536447,
    0.82112226871,
    -0.00930733913,
    0.00004731582,
    -0.00000009054,
];

fn polinomio(coeficientes: &[f64; 6], x: f64) -> f64 {
    coeficientes
        .iter()
        .rev()
        .fold(0.0, |acc, coeficiente| acc * x + coeficiente)
}

/// Coeficiente de Wilks para un peso corporal en kg
pub fn coeficiente(peso_corporal: f64, genero: &str) -> f64 {
    let coeficientes = if genero.eq_ignore_ascii_case("femenino") {
        &FEMENINO
    } else {
        &MASCULINO
    };

    500.0 / polinomio(coeficientes, peso_corporal)
}

/// Puntaje Wilks: total levantado (kg) por el coeficiente del atleta
pub fn puntaje(total: f64, peso_corporal: f64, genero: &str) -> f64 {
    total * coeficiente(peso_corporal, genero)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coeficiente_masculino_80kg() {
        // Valor de referencia calculado con el polinomio masculino
        let c = coeficiente(80.0, "Masculino");
        assert!((c - 0.46887).abs() < 0.0005, "coeficiente fuera de rango: {}", c);
    }

    #[test]
    fn test_puntaje_masculino() {
        let p = puntaje(500.0, 80.0, "Masculino");
        assert!((p - 234.44).abs() < 0.25, "puntaje fuera de rango: {}", p);
    }

    #[test]
    fn test_coeficiente_femenino_60kg() {
        let c = coeficiente(60.0, "Femenino");
        assert!((c - 1.1149).abs() < 0.005, "coeficiente fuera de rango: {}", c);
    }

    #[test]
    fn test_genero_desconocido_usa_masculino() {
        assert_eq!(coeficiente(80.0, "Otro"), coeficiente(80.0, "Masculino"));
    }

    #[test]
    fn test_puntaje_crece_con_el_total() {
        assert!(puntaje(600.0, 80.0, "Masculino") > puntaje(500.0, 80.0, "Masculino"));
    }

    #[test]
    fn test_coeficiente_decrece_con_el_peso() {
        // A mayor peso corporal, menor coeficiente multiplicador
        assert!(coeficiente(60.0, "Masculino") > coeficiente(120.0, "Masculino"));
    }
}
