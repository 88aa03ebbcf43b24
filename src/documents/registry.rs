//! Fixed registry of the eleven convenio document types.

use serde::{Deserialize, Serialize};

/// The eleven supported document types, in menu order.
///
/// The order is significant: the selection menu numbers the variants
/// 1..=11 in declaration order. Defined at process start, never
/// mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    NinosAdolescentes,
    TerceroDirectoRccRcl,
    TipoLetradoRccRcl,
    TipoLetradoMuerte,
    CesionDerechosRcc,
    Honorarios,
    Patrocinio,
    DesistimientoRenuncia,
    DesistimientoSustitucion,
    ReciboPagoTercero,
    DeclaracionNoSeguro,
}

impl DocumentType {
    /// All document types, in menu order.
    pub const ALL: [DocumentType; 11] = [
        Self::NinosAdolescentes,
        Self::TerceroDirectoRccRcl,
        Self::TipoLetradoRccRcl,
        Self::TipoLetradoMuerte,
        Self::CesionDerechosRcc,
        Self::Honorarios,
        Self::Patrocinio,
        Self::DesistimientoRenuncia,
        Self::DesistimientoSustitucion,
        Self::ReciboPagoTercero,
        Self::DeclaracionNoSeguro,
    ];

    /// Internal key. Also used in generated output filenames.
    pub fn key(&self) -> &'static str {
        match self {
            Self::NinosAdolescentes => "ninos_adolescentes",
            Self::TerceroDirectoRccRcl => "tercero_directo_rcc_rcl",
            Self::TipoLetradoRccRcl => "tipo_letrado_rcc_rcl",
            Self::TipoLetradoMuerte => "tipo_letrado_muerte",
            Self::CesionDerechosRcc => "cesion_derechos_rcc",
            Self::Honorarios => "honorarios",
            Self::Patrocinio => "patrocinio",
            Self::DesistimientoRenuncia => "desistimiento_renuncia",
            Self::DesistimientoSustitucion => "desistimiento_sustitucion",
            Self::ReciboPagoTercero => "recibo_pago_tercero",
            Self::DeclaracionNoSeguro => "declaracion_no_seguro",
        }
    }

    /// Human-readable label shown in the selection menu and summary.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NinosAdolescentes => "Convenio Niños y Adolescentes",
            Self::TerceroDirectoRccRcl => "Convenio Tercero Directo (RCC y RCL)",
            Self::TipoLetradoRccRcl => "Convenio Tipo Letrado (RCC y RCL)",
            Self::TipoLetradoMuerte => "Convenio Tipo Letrado Muerte",
            Self::CesionDerechosRcc => "Convenio con Cesión de Derechos (RCC)",
            Self::Honorarios => "Convenio Honorarios",
            Self::Patrocinio => "Convenio Patrocinio",
            Self::DesistimientoRenuncia => "Desistimiento por Renuncia de Derechos",
            Self::DesistimientoSustitucion => "Desistimiento Sustitución de Tercero",
            Self::ReciboPagoTercero => "Recibo de Pago a Tercero",
            Self::DeclaracionNoSeguro => "Declaración Jurada de No Seguro",
        }
    }

    /// Template filename under the templates directory.
    pub fn template_file(&self) -> &'static str {
        match self {
            Self::NinosAdolescentes => "Convenio Niños y Adolescentes.doc",
            Self::TerceroDirectoRccRcl => "Convenio tercero directo (RCC y RCL).doc",
            Self::TipoLetradoRccRcl => "Convenio Tipo Letrado (RCC y RCL).doc",
            Self::TipoLetradoMuerte => "Convenio Tipo Letrado Muerte.doc",
            Self::CesionDerechosRcc => "Convenio con Cesión de Derechos (RCC).doc",
            Self::Honorarios => "CONVENIO HONORARIOS.doc",
            Self::Patrocinio => "CONVENIO PATROCINIO.doc",
            Self::DesistimientoRenuncia => "Desistimiento Por Renuncia de Derechos.docx",
            Self::DesistimientoSustitucion => "Desistimiento Sustitución de Tercero.docx",
            Self::ReciboPagoTercero => "Recibo de Pago a Tercero (Efectivo).doc",
            Self::DeclaracionNoSeguro => "Declaracion Jurada de no Seguro.doc",
        }
    }

    /// Resolve a 1-indexed menu choice.
    pub fn from_menu_choice(choice: usize) -> Option<Self> {
        if (1..=Self::ALL.len()).contains(&choice) {
            Some(Self::ALL[choice - 1])
        } else {
            None
        }
    }

    /// Resolve an internal key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.key() == key)
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
