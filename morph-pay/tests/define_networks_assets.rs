use std::{borrow::Cow, fmt::Display, str::FromStr};

use alloy_primitives::address;
use morph_pay::{
    config::ChainConfig,
    core::{Address, NetworkFamily},
    currency::Stablecoin,
    networks::evm::{EvmAddress, EvmAsset, EvmNetwork, ExplicitEvmAsset, ExplicitEvmNetwork},
    transfer::TransferTx,
    types::PaymentRequest,
};

#[test]
fn test_define_new_evm_network() {
    struct CustomEvmNetwork;

    impl ExplicitEvmNetwork for CustomEvmNetwork {
        const NETWORK: EvmNetwork = EvmNetwork {
            name: Cow::Borrowed("custom-evm-network"),
            chain_id: 12345,
            network_id: Cow::Borrowed("eip155:12345"),
        };
    }

    let network: EvmNetwork = CustomEvmNetwork.into();
    assert_eq!(network.network_name(), "custom-evm-network");
    assert_eq!(network.network_id(), "eip155:12345");
    assert_eq!(network.chain_id, 12345);
    assert_eq!(CustomEvmNetwork::NATIVE_CURRENCY.symbol, "ETH");
}

#[test]
fn test_define_new_evm_asset_and_pay_with_it() {
    struct MyCustomNetwork;
    impl ExplicitEvmNetwork for MyCustomNetwork {
        const NETWORK: EvmNetwork = EvmNetwork {
            name: Cow::Borrowed("my-network"),
            chain_id: 99999,
            network_id: Cow::Borrowed("eip155:99999"),
        };
    }

    struct MyCustomToken;
    impl ExplicitEvmAsset for MyCustomToken {
        type Network = MyCustomNetwork;

        const ASSET: EvmAsset = EvmAsset {
            address: EvmAddress(address!("0x1234567890123456789012345678901234567890")),
            decimals: 18,
            name: Cow::Borrowed("My Custom Token"),
            symbol: Cow::Borrowed("MCT"),
        };
    }

    let asset: EvmAsset = MyCustomToken::ASSET;
    assert_eq!(asset.decimals, 18);
    assert_eq!(asset.name, "My Custom Token");
    assert_eq!(asset.symbol, "MCT");
    assert_eq!(
        asset.address.to_string(),
        "0x1234567890123456789012345678901234567890"
    );

    // A token with 18 decimals scales the same way as the native coin.
    let config = ChainConfig::for_network::<MyCustomNetwork>()
        .with_stablecoin(Stablecoin::Usdt, MyCustomToken);
    let request = PaymentRequest::builder()
        .pay_to("0x3cb9b3bbfde8501f411bb69ad3dc07908ed0de20")
        .amount("0.5")
        .currency("USDT")
        .build();

    let TransferTx::ContractCall(call) =
        TransferTx::build(&config, &request, Stablecoin::Usdc).unwrap()
    else {
        panic!("expected a contract call");
    };
    assert_eq!(call.contract, MyCustomToken::ASSET.address);
    assert_eq!(call.chain_id, 99999);
    assert_eq!(call.data.len(), 4 + 32 + 32);
}

#[test]
fn test_define_network_family() {
    struct MyNetworkFamily {
        network_name: &'static str,
        network_id: &'static str,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    struct MyAddress(u64);

    impl FromStr for MyAddress {
        type Err = ();

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            s.parse::<u64>().map(MyAddress).map_err(|_| ())
        }
    }

    impl Display for MyAddress {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl NetworkFamily for MyNetworkFamily {
        fn network_name(&self) -> &str {
            self.network_name
        }
        fn network_id(&self) -> &str {
            self.network_id
        }
    }

    impl Address for MyAddress {
        type Network = MyNetworkFamily;
    }

    let asset = morph_pay::core::Asset {
        address: MyAddress(7),
        decimals: 2,
        name: Cow::Borrowed("Points"),
        symbol: Cow::Borrowed("PTS"),
    };
    assert_eq!(asset.address.to_string(), "7");

    let network = MyNetworkFamily {
        network_name: "my-network",
        network_id: "42",
    };
    assert_eq!(network.network_name(), "my-network");
    assert_eq!(network.network_id(), "42");

    let address: MyAddress = "100".parse().unwrap();
    assert_eq!(address.to_string(), "100");
}
