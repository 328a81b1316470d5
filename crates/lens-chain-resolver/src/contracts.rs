//! Contract bindings

ethers::contract::abigen!(
    LensHub,
    r#"[
        function defaultProfile(address wallet) external view returns (uint256)
        function getHandle(uint256 profileId) external view returns (string)
    ]"#
);
