use soroban_sdk::{
    token::{StellarAssetClient, TokenClient},
    Address, Env,
};

pub fn create_stellar_token<'a>(
    e: &Env,
    admin: &Address,
) -> (Address, TokenClient<'a>, StellarAssetClient<'a>) {
    let contract_id = e.register_stellar_asset_contract(admin.clone());
    let client = TokenClient::new(e, &contract_id);
    let admin_client = StellarAssetClient::new(e, &contract_id);
    (contract_id, client, admin_client)
}
