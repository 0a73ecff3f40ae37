use cosmwasm_schema::cw_serde;
use cosmwasm_std::{CustomQuery, QuerierWrapper, QueryRequest, StdResult};
use memefactory_std::bank::Metadata;
use memefactory_std::tokenfactory::common::encode;

pub const DENOM_AUTHORITY_METADATA_PATH: &str =
    "/osmosis.tokenfactory.v1beta1.Query/DenomAuthorityMetadata";
pub const DENOM_METADATA_PATH: &str = "/cosmos.bank.v1beta1.Query/DenomMetadata";

/// Request body shared by the denom scoped queries.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct QueryDenomRequest {
    #[prost(string, tag = "1")]
    pub denom: ::prost::alloc::string::String,
}

#[cw_serde]
pub struct DenomAuthorityMetadata {
    pub admin: String,
}

#[cw_serde]
pub struct QueryDenomAuthorityMetadataResponse {
    pub authority_metadata: DenomAuthorityMetadata,
}

#[cw_serde]
pub struct DenomUnitRecord {
    pub denom: String,
    pub exponent: u32,
}

/// Bank metadata of a denom, in its JSON query form.
#[cw_serde]
pub struct DenomMetadataRecord {
    pub description: String,
    pub denom_units: Vec<DenomUnitRecord>,
    pub base: String,
    pub display: String,
    pub name: String,
    pub symbol: String,
    pub uri: String,
}

impl From<&Metadata> for DenomMetadataRecord {
    fn from(metadata: &Metadata) -> Self {
        DenomMetadataRecord {
            description: metadata.description.clone(),
            denom_units: metadata
                .denom_units
                .iter()
                .map(|unit| DenomUnitRecord {
                    denom: unit.denom.clone(),
                    exponent: unit.exponent,
                })
                .collect(),
            base: metadata.base.clone(),
            display: metadata.display.clone(),
            name: metadata.name.clone(),
            symbol: metadata.symbol.clone(),
            uri: metadata.uri.clone(),
        }
    }
}

#[cw_serde]
pub struct QueryDenomMetadataResponse {
    pub metadata: DenomMetadataRecord,
}

fn denom_query<C: CustomQuery>(path: &str, denom: &str) -> QueryRequest<C> {
    QueryRequest::Stargate {
        path: path.to_string(),
        data: encode(&QueryDenomRequest {
            denom: denom.to_string(),
        }),
    }
}

/// Current admin of a token factory denom.
pub fn query_denom_admin<C: CustomQuery>(
    querier: &QuerierWrapper<C>,
    denom: &str,
) -> StdResult<String> {
    let response: QueryDenomAuthorityMetadataResponse =
        querier.query(&denom_query(DENOM_AUTHORITY_METADATA_PATH, denom))?;

    Ok(response.authority_metadata.admin)
}

pub fn query_denom_metadata<C: CustomQuery>(
    querier: &QuerierWrapper<C>,
    denom: &str,
) -> StdResult<DenomMetadataRecord> {
    let response: QueryDenomMetadataResponse =
        querier.query(&denom_query(DENOM_METADATA_PATH, denom))?;

    Ok(response.metadata)
}
