//! Auto-generated from the Amazon EC2 2014-10-01 API model. DO NOT EDIT.

use serde::{Deserialize, Serialize};

use crate::types::{
    AccountAttribute, Address, AttributeBooleanValue, AttributeValue, AvailabilityZone, BundleTask,
    CancelledSpotInstanceRequest, ConversionTask, CreateVolumePermission, CustomerGateway,
    DhcpOptions, ExportTask, GroupIdentifier, Image, InstanceMonitoring, InstanceStateChange,
    InstanceStatus, InternetGateway, KeyPairInfo, NetworkAcl, NetworkInterface,
    NetworkInterfaceAttachment, PlacementGroup, ProductCode, Region, Reservation, ReservedInstances,
    ReservedInstancesListing, ReservedInstancesModification, ReservedInstancesOffering, RouteTable,
    SecurityGroup, Snapshot, SpotDatafeedSubscription, SpotInstanceRequest, SpotPrice, Subnet,
    TagDescription, Volume, VolumeStatusItem, Vpc, VpcAttachment, VpcPeeringConnection,
    VpnConnection, VpnGateway,
};

/// EC2 AcceptVpcPeeringConnectionResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AcceptVpcPeeringConnectionResult {
    /// XML element: `vpcPeeringConnection`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_peering_connection: Option<VpcPeeringConnection>,
}

/// EC2 AllocateAddressResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AllocateAddressResult {
    /// XML element: `allocationId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation_id: Option<String>,
    /// XML element: `domain`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// XML element: `publicIp`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_ip: Option<String>,
}

/// EC2 AssociateAddressResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AssociateAddressResult {
    /// XML element: `associationId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_id: Option<String>,
}

/// EC2 AssociateRouteTableResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AssociateRouteTableResult {
    /// XML element: `associationId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_id: Option<String>,
}

/// EC2 AttachNetworkInterfaceResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AttachNetworkInterfaceResult {
    /// XML element: `attachmentId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_id: Option<String>,
}

/// EC2 AttachVpnGatewayResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AttachVpnGatewayResult {
    /// XML element: `attachment`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_attachment: Option<VpcAttachment>,
}

/// EC2 BundleInstanceResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BundleInstanceResult {
    /// XML element: `bundleInstanceTask`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle_task: Option<BundleTask>,
}

/// EC2 CancelBundleTaskResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CancelBundleTaskResult {
    /// XML element: `bundleInstanceTask`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle_task: Option<BundleTask>,
}

/// EC2 CancelReservedInstancesListingResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CancelReservedInstancesListingResult {
    /// XML element: `reservedInstancesListingsSet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reserved_instances_listings: Vec<ReservedInstancesListing>,
}

/// EC2 CancelSpotInstanceRequestsResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CancelSpotInstanceRequestsResult {
    /// XML element: `spotInstanceRequestSet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cancelled_spot_instance_requests: Vec<CancelledSpotInstanceRequest>,
}

/// EC2 ConfirmProductInstanceResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ConfirmProductInstanceResult {
    /// XML element: `ownerId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
}

/// EC2 CopyImageResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CopyImageResult {
    /// XML element: `imageId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
}

/// EC2 CopySnapshotResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CopySnapshotResult {
    /// XML element: `snapshotId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
}

/// EC2 CreateCustomerGatewayResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateCustomerGatewayResult {
    /// XML element: `customerGateway`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_gateway: Option<CustomerGateway>,
}

/// EC2 CreateDhcpOptionsResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateDhcpOptionsResult {
    /// XML element: `dhcpOptions`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dhcp_options: Option<DhcpOptions>,
}

/// EC2 CreateImageResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateImageResult {
    /// XML element: `imageId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
}

/// EC2 CreateInstanceExportTaskResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateInstanceExportTaskResult {
    /// XML element: `exportTask`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_task: Option<ExportTask>,
}

/// EC2 CreateInternetGatewayResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateInternetGatewayResult {
    /// XML element: `internetGateway`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internet_gateway: Option<InternetGateway>,
}

/// EC2 CreateNetworkAclResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateNetworkAclResult {
    /// XML element: `networkAcl`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_acl: Option<NetworkAcl>,
}

/// EC2 CreateNetworkInterfaceResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateNetworkInterfaceResult {
    /// XML element: `networkInterface`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_interface: Option<NetworkInterface>,
}

/// EC2 CreateReservedInstancesListingResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateReservedInstancesListingResult {
    /// XML element: `reservedInstancesListingsSet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reserved_instances_listings: Vec<ReservedInstancesListing>,
}

/// EC2 CreateRouteTableResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateRouteTableResult {
    /// XML element: `routeTable`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_table: Option<RouteTable>,
}

/// EC2 CreateSecurityGroupResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateSecurityGroupResult {
    /// XML element: `groupId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

/// EC2 CreateSpotDatafeedSubscriptionResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateSpotDatafeedSubscriptionResult {
    /// XML element: `spotDatafeedSubscription`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spot_datafeed_subscription: Option<SpotDatafeedSubscription>,
}

/// EC2 CreateSubnetResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateSubnetResult {
    /// XML element: `subnet`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet: Option<Subnet>,
}

/// EC2 CreateVpcPeeringConnectionResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateVpcPeeringConnectionResult {
    /// XML element: `vpcPeeringConnection`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_peering_connection: Option<VpcPeeringConnection>,
}

/// EC2 CreateVpcResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateVpcResult {
    /// XML element: `vpc`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc: Option<Vpc>,
}

/// EC2 CreateVpnConnectionResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateVpnConnectionResult {
    /// XML element: `vpnConnection`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpn_connection: Option<VpnConnection>,
}

/// EC2 CreateVpnGatewayResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateVpnGatewayResult {
    /// XML element: `vpnGateway`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpn_gateway: Option<VpnGateway>,
}

/// EC2 DeleteVpcPeeringConnectionResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteVpcPeeringConnectionResult {
    /// XML element: `return`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#return: Option<bool>,
}

/// EC2 DescribeAccountAttributesResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeAccountAttributesResult {
    /// XML element: `accountAttributeSet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub account_attributes: Vec<AccountAttribute>,
}

/// EC2 DescribeAddressesResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeAddressesResult {
    /// XML element: `addressesSet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<Address>,
}

/// EC2 DescribeAvailabilityZonesResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeAvailabilityZonesResult {
    /// XML element: `availabilityZoneInfo`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub availability_zones: Vec<AvailabilityZone>,
}

/// EC2 DescribeBundleTasksResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeBundleTasksResult {
    /// XML element: `bundleInstanceTasksSet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bundle_tasks: Vec<BundleTask>,
}

/// EC2 DescribeConversionTasksResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeConversionTasksResult {
    /// XML element: `conversionTasks`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conversion_tasks: Vec<ConversionTask>,
}

/// EC2 DescribeCustomerGatewaysResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeCustomerGatewaysResult {
    /// XML element: `customerGatewaySet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub customer_gateways: Vec<CustomerGateway>,
}

/// EC2 DescribeDhcpOptionsResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeDhcpOptionsResult {
    /// XML element: `dhcpOptionsSet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dhcp_options: Vec<DhcpOptions>,
}

/// EC2 DescribeExportTasksResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeExportTasksResult {
    /// XML element: `exportTaskSet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub export_tasks: Vec<ExportTask>,
}

/// EC2 DescribeImagesResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeImagesResult {
    /// XML element: `imagesSet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Image>,
}

/// EC2 DescribeInstanceStatusResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeInstanceStatusResult {
    /// XML element: `instanceStatusSet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub instance_statuses: Vec<InstanceStatus>,
    /// XML element: `nextToken`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// EC2 DescribeInstancesResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeInstancesResult {
    /// XML element: `nextToken`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// XML element: `reservationSet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reservations: Vec<Reservation>,
}

/// EC2 DescribeInternetGatewaysResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeInternetGatewaysResult {
    /// XML element: `internetGatewaySet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub internet_gateways: Vec<InternetGateway>,
}

/// EC2 DescribeKeyPairsResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeKeyPairsResult {
    /// XML element: `keySet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub key_pairs: Vec<KeyPairInfo>,
}

/// EC2 DescribeNetworkAclsResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeNetworkAclsResult {
    /// XML element: `networkAclSet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub network_acls: Vec<NetworkAcl>,
}

/// EC2 DescribeNetworkInterfaceAttributeResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeNetworkInterfaceAttributeResult {
    /// XML element: `attachment`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<NetworkInterfaceAttachment>,
    /// XML element: `description`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<AttributeValue>,
    /// XML element: `groupSet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<GroupIdentifier>,
    /// XML element: `networkInterfaceId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_interface_id: Option<String>,
    /// XML element: `sourceDestCheck`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_dest_check: Option<AttributeBooleanValue>,
}

/// EC2 DescribeNetworkInterfacesResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeNetworkInterfacesResult {
    /// XML element: `networkInterfaceSet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub network_interfaces: Vec<NetworkInterface>,
}

/// EC2 DescribePlacementGroupsResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribePlacementGroupsResult {
    /// XML element: `placementGroupSet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub placement_groups: Vec<PlacementGroup>,
}

/// EC2 DescribeRegionsResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeRegionsResult {
    /// XML element: `regionInfo`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub regions: Vec<Region>,
}

/// EC2 DescribeReservedInstancesListingsResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeReservedInstancesListingsResult {
    /// XML element: `reservedInstancesListingsSet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reserved_instances_listings: Vec<ReservedInstancesListing>,
}

/// EC2 DescribeReservedInstancesModificationsResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeReservedInstancesModificationsResult {
    /// XML element: `nextToken`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// XML element: `reservedInstancesModificationsSet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reserved_instances_modifications: Vec<ReservedInstancesModification>,
}

/// EC2 DescribeReservedInstancesOfferingsResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeReservedInstancesOfferingsResult {
    /// XML element: `nextToken`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// XML element: `reservedInstancesOfferingsSet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reserved_instances_offerings: Vec<ReservedInstancesOffering>,
}

/// EC2 DescribeReservedInstancesResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeReservedInstancesResult {
    /// XML element: `reservedInstancesSet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reserved_instances: Vec<ReservedInstances>,
}

/// EC2 DescribeRouteTablesResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeRouteTablesResult {
    /// XML element: `routeTableSet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub route_tables: Vec<RouteTable>,
}

/// EC2 DescribeSecurityGroupsResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeSecurityGroupsResult {
    /// XML element: `securityGroupInfo`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub security_groups: Vec<SecurityGroup>,
}

/// EC2 DescribeSnapshotAttributeResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeSnapshotAttributeResult {
    /// XML element: `createVolumePermission`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub create_volume_permissions: Vec<CreateVolumePermission>,
    /// XML element: `productCodes`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub product_codes: Vec<ProductCode>,
    /// XML element: `snapshotId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
}

/// EC2 DescribeSnapshotsResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeSnapshotsResult {
    /// XML element: `snapshotSet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub snapshots: Vec<Snapshot>,
}

/// EC2 DescribeSpotDatafeedSubscriptionResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeSpotDatafeedSubscriptionResult {
    /// XML element: `spotDatafeedSubscription`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spot_datafeed_subscription: Option<SpotDatafeedSubscription>,
}

/// EC2 DescribeSpotInstanceRequestsResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeSpotInstanceRequestsResult {
    /// XML element: `spotInstanceRequestSet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub spot_instance_requests: Vec<SpotInstanceRequest>,
}

/// EC2 DescribeSpotPriceHistoryResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeSpotPriceHistoryResult {
    /// XML element: `nextToken`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// XML element: `spotPriceHistorySet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub spot_price_history: Vec<SpotPrice>,
}

/// EC2 DescribeSubnetsResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeSubnetsResult {
    /// XML element: `subnetSet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subnets: Vec<Subnet>,
}

/// EC2 DescribeTagsResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeTagsResult {
    /// XML element: `nextToken`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// XML element: `tagSet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagDescription>,
}

/// EC2 DescribeVolumeAttributeResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeVolumeAttributeResult {
    /// XML element: `autoEnableIO`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_enable_io: Option<AttributeBooleanValue>,
    /// XML element: `productCodes`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub product_codes: Vec<ProductCode>,
    /// XML element: `volumeId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_id: Option<String>,
}

/// EC2 DescribeVolumeStatusResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeVolumeStatusResult {
    /// XML element: `nextToken`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// XML element: `volumeStatusSet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub volume_statuses: Vec<VolumeStatusItem>,
}

/// EC2 DescribeVolumesResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeVolumesResult {
    /// XML element: `nextToken`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// XML element: `volumeSet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<Volume>,
}

/// EC2 DescribeVpcAttributeResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeVpcAttributeResult {
    /// XML element: `enableDnsHostnames`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_dns_hostnames: Option<AttributeBooleanValue>,
    /// XML element: `enableDnsSupport`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_dns_support: Option<AttributeBooleanValue>,
    /// XML element: `vpcId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
}

/// EC2 DescribeVpcPeeringConnectionsResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeVpcPeeringConnectionsResult {
    /// XML element: `vpcPeeringConnectionSet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vpc_peering_connections: Vec<VpcPeeringConnection>,
}

/// EC2 DescribeVpcsResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeVpcsResult {
    /// XML element: `vpcSet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vpcs: Vec<Vpc>,
}

/// EC2 DescribeVpnConnectionsResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeVpnConnectionsResult {
    /// XML element: `vpnConnectionSet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vpn_connections: Vec<VpnConnection>,
}

/// EC2 DescribeVpnGatewaysResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeVpnGatewaysResult {
    /// XML element: `vpnGatewaySet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vpn_gateways: Vec<VpnGateway>,
}

/// EC2 GetConsoleOutputResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetConsoleOutputResult {
    /// XML element: `instanceId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    /// XML element: `output`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// XML element: `timestamp`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<chrono::DateTime<chrono::Utc>>,
}

/// EC2 GetPasswordDataResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetPasswordDataResult {
    /// XML element: `instanceId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    /// XML element: `passwordData`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_data: Option<String>,
    /// XML element: `timestamp`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<chrono::DateTime<chrono::Utc>>,
}

/// EC2 ImportInstanceResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ImportInstanceResult {
    /// XML element: `conversionTask`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion_task: Option<ConversionTask>,
}

/// EC2 ImportKeyPairResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ImportKeyPairResult {
    /// XML element: `keyFingerprint`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_fingerprint: Option<String>,
    /// XML element: `keyName`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
}

/// EC2 ImportVolumeResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ImportVolumeResult {
    /// XML element: `conversionTask`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion_task: Option<ConversionTask>,
}

/// EC2 ModifyReservedInstancesResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ModifyReservedInstancesResult {
    /// XML element: `reservedInstancesModificationId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_instances_modification_id: Option<String>,
}

/// EC2 MonitorInstancesResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MonitorInstancesResult {
    /// XML element: `instancesSet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub instance_monitorings: Vec<InstanceMonitoring>,
}

/// EC2 PurchaseReservedInstancesOfferingResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PurchaseReservedInstancesOfferingResult {
    /// XML element: `reservedInstancesId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_instances_id: Option<String>,
}

/// EC2 RegisterImageResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RegisterImageResult {
    /// XML element: `imageId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
}

/// EC2 RejectVpcPeeringConnectionResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RejectVpcPeeringConnectionResult {
    /// XML element: `return`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#return: Option<bool>,
}

/// EC2 ReplaceNetworkAclAssociationResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReplaceNetworkAclAssociationResult {
    /// XML element: `newAssociationId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_association_id: Option<String>,
}

/// EC2 ReplaceRouteTableAssociationResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReplaceRouteTableAssociationResult {
    /// XML element: `newAssociationId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_association_id: Option<String>,
}

/// EC2 RequestSpotInstancesResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RequestSpotInstancesResult {
    /// XML element: `spotInstanceRequestSet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub spot_instance_requests: Vec<SpotInstanceRequest>,
}

/// EC2 StartInstancesResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StartInstancesResult {
    /// XML element: `instancesSet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub starting_instances: Vec<InstanceStateChange>,
}

/// EC2 StopInstancesResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StopInstancesResult {
    /// XML element: `instancesSet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stopping_instances: Vec<InstanceStateChange>,
}

/// EC2 TerminateInstancesResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TerminateInstancesResult {
    /// XML element: `instancesSet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub terminating_instances: Vec<InstanceStateChange>,
}

/// EC2 UnmonitorInstancesResult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UnmonitorInstancesResult {
    /// XML element: `instancesSet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub instance_monitorings: Vec<InstanceMonitoring>,
}
