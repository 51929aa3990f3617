use crate::modules::region::domain::{MunicipalityName, RegionCode};
use crate::shared::errors::AppError;
use serde::Deserialize;

/// Entry of `GET /estados`. Only the abbreviation is used.
#[derive(Debug, Clone, Deserialize)]
pub struct IbgeStateDto {
    pub sigla: String,
}

/// Entry of `GET /estados/{UF}/municipios`.
#[derive(Debug, Clone, Deserialize)]
pub struct IbgeMunicipalityDto {
    pub nome: String,
}

impl TryFrom<IbgeStateDto> for RegionCode {
    type Error = AppError;

    fn try_from(dto: IbgeStateDto) -> Result<Self, Self::Error> {
        RegionCode::parse(&dto.sigla)
    }
}

impl TryFrom<IbgeMunicipalityDto> for MunicipalityName {
    type Error = AppError;

    fn try_from(dto: IbgeMunicipalityDto) -> Result<Self, Self::Error> {
        MunicipalityName::parse(&dto.nome)
    }
}
