//! Auto-generated from the Amazon EC2 2014-10-01 API model. DO NOT EDIT.

use serde::{Deserialize, Serialize};

use awsbind_query::Blob;

use crate::types::{
    AttributeBooleanValue, AttributeValue, BlobAttributeValue, BlockDeviceMapping,
    CreateVolumePermissionModifications, DiskImage, DiskImageDetail, ExportToS3TaskSpecification,
    Filter, IamInstanceProfileSpecification, IcmpTypeCode, ImportInstanceLaunchSpecification,
    InstanceBlockDeviceMappingSpecification, InstanceNetworkInterfaceSpecification, IpPermission,
    LaunchPermissionModifications, NetworkInterfaceAttachmentChanges, NewDhcpConfiguration,
    Placement, PortRange, PriceScheduleSpecification, PrivateIpAddressSpecification,
    RequestSpotLaunchSpecification, ReservedInstanceLimitPrice, ReservedInstancesConfiguration,
    RunInstancesMonitoringEnabled, Storage, Tag, VolumeDetail, VpnConnectionOptionsSpecification,
};

/// EC2 AcceptVpcPeeringConnectionRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AcceptVpcPeeringConnectionRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `VpcPeeringConnectionId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_peering_connection_id: Option<String>,
}

/// EC2 AllocateAddressRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AllocateAddressRequest {
    /// Query parameter: `Domain`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

/// EC2 AssignPrivateIpAddressesRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AssignPrivateIpAddressesRequest {
    /// Query parameter: `AllowReassignment`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_reassignment: Option<bool>,
    /// Query parameter: `NetworkInterfaceId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_interface_id: Option<String>,
    /// Query parameter: `PrivateIpAddress`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub private_ip_addresses: Vec<String>,
    /// Query parameter: `SecondaryPrivateIpAddressCount`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_private_ip_address_count: Option<i32>,
}

/// EC2 AssociateAddressRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AssociateAddressRequest {
    /// Query parameter: `AllocationId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation_id: Option<String>,
    /// Query parameter: `AllowReassociation`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_reassociation: Option<bool>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `InstanceId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    /// Query parameter: `NetworkInterfaceId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_interface_id: Option<String>,
    /// Query parameter: `PrivateIpAddress`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_ip_address: Option<String>,
    /// Query parameter: `PublicIp`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_ip: Option<String>,
}

/// EC2 AssociateDhcpOptionsRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AssociateDhcpOptionsRequest {
    /// Query parameter: `DhcpOptionsId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dhcp_options_id: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `VpcId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
}

/// EC2 AssociateRouteTableRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AssociateRouteTableRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `RouteTableId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_table_id: Option<String>,
    /// Query parameter: `SubnetId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
}

/// EC2 AttachInternetGatewayRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AttachInternetGatewayRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `InternetGatewayId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internet_gateway_id: Option<String>,
    /// Query parameter: `VpcId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
}

/// EC2 AttachNetworkInterfaceRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AttachNetworkInterfaceRequest {
    /// Query parameter: `DeviceIndex`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_index: Option<i32>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `InstanceId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    /// Query parameter: `NetworkInterfaceId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_interface_id: Option<String>,
}

/// EC2 AttachVolumeRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AttachVolumeRequest {
    /// Query parameter: `Device`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `InstanceId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    /// Query parameter: `VolumeId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_id: Option<String>,
}

/// EC2 AttachVpnGatewayRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AttachVpnGatewayRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `VpcId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    /// Query parameter: `VpnGatewayId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpn_gateway_id: Option<String>,
}

/// EC2 AuthorizeSecurityGroupEgressRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AuthorizeSecurityGroupEgressRequest {
    /// Query parameter: `CidrIp`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidr_ip: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `FromPort`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_port: Option<i32>,
    /// Query parameter: `GroupId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// Query parameter: `IpPermissions`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ip_permissions: Vec<IpPermission>,
    /// Query parameter: `IpProtocol`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_protocol: Option<String>,
    /// Query parameter: `SourceSecurityGroupName`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_security_group_name: Option<String>,
    /// Query parameter: `SourceSecurityGroupOwnerId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_security_group_owner_id: Option<String>,
    /// Query parameter: `ToPort`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_port: Option<i32>,
}

/// EC2 AuthorizeSecurityGroupIngressRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AuthorizeSecurityGroupIngressRequest {
    /// Query parameter: `CidrIp`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidr_ip: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `FromPort`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_port: Option<i32>,
    /// Query parameter: `GroupId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// Query parameter: `GroupName`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    /// Query parameter: `IpPermissions`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ip_permissions: Vec<IpPermission>,
    /// Query parameter: `IpProtocol`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_protocol: Option<String>,
    /// Query parameter: `SourceSecurityGroupName`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_security_group_name: Option<String>,
    /// Query parameter: `SourceSecurityGroupOwnerId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_security_group_owner_id: Option<String>,
    /// Query parameter: `ToPort`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_port: Option<i32>,
}

/// EC2 BundleInstanceRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BundleInstanceRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `InstanceId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    /// Query parameter: `Storage`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<Storage>,
}

/// EC2 CancelBundleTaskRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CancelBundleTaskRequest {
    /// Query parameter: `BundleId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle_id: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

/// EC2 CancelConversionRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CancelConversionRequest {
    /// Query parameter: `ConversionTaskId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion_task_id: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `ReasonMessage`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_message: Option<String>,
}

/// EC2 CancelExportTaskRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CancelExportTaskRequest {
    /// Query parameter: `ExportTaskId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_task_id: Option<String>,
}

/// EC2 CancelReservedInstancesListingRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CancelReservedInstancesListingRequest {
    /// Query parameter: `ReservedInstancesListingId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_instances_listing_id: Option<String>,
}

/// EC2 CancelSpotInstanceRequestsRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CancelSpotInstanceRequestsRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `SpotInstanceRequestId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub spot_instance_request_ids: Vec<String>,
}

/// EC2 ConfirmProductInstanceRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ConfirmProductInstanceRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `InstanceId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    /// Query parameter: `ProductCode`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,
}

/// EC2 CopyImageRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CopyImageRequest {
    /// Query parameter: `ClientToken`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    /// Query parameter: `Description`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Query parameter: `SourceImageId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_image_id: Option<String>,
    /// Query parameter: `SourceRegion`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_region: Option<String>,
}

/// EC2 CopySnapshotRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CopySnapshotRequest {
    /// Query parameter: `Description`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Query parameter: `DestinationRegion`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_region: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `PresignedUrl`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presigned_url: Option<String>,
    /// Query parameter: `SourceRegion`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_region: Option<String>,
    /// Query parameter: `SourceSnapshotId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_snapshot_id: Option<String>,
}

/// EC2 CreateCustomerGatewayRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateCustomerGatewayRequest {
    /// Query parameter: `BgpAsn`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgp_asn: Option<i32>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `IpAddress`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_ip: Option<String>,
    /// Query parameter: `Type`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

/// EC2 CreateDhcpOptionsRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateDhcpOptionsRequest {
    /// Query parameter: `DhcpConfiguration`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dhcp_configurations: Vec<NewDhcpConfiguration>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

/// EC2 CreateImageRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateImageRequest {
    /// Query parameter: `BlockDeviceMapping`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub block_device_mappings: Vec<BlockDeviceMapping>,
    /// Query parameter: `Description`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `InstanceId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    /// Query parameter: `Name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Query parameter: `NoReboot`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_reboot: Option<bool>,
}

/// EC2 CreateInstanceExportTaskRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateInstanceExportTaskRequest {
    /// Query parameter: `Description`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Query parameter: `ExportToS3`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_to_s3_task: Option<ExportToS3TaskSpecification>,
    /// Query parameter: `InstanceId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    /// Query parameter: `TargetEnvironment`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_environment: Option<String>,
}

/// EC2 CreateInternetGatewayRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateInternetGatewayRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

/// EC2 CreateKeyPairRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateKeyPairRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `KeyName`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
}

/// EC2 CreateNetworkAclEntryRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateNetworkAclEntryRequest {
    /// Query parameter: `CidrBlock`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidr_block: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Egress`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub egress: Option<bool>,
    /// Query parameter: `Icmp`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icmp_type_code: Option<IcmpTypeCode>,
    /// Query parameter: `NetworkAclId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_acl_id: Option<String>,
    /// Query parameter: `PortRange`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_range: Option<PortRange>,
    /// Query parameter: `Protocol`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    /// Query parameter: `RuleAction`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_action: Option<String>,
    /// Query parameter: `RuleNumber`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_number: Option<i32>,
}

/// EC2 CreateNetworkAclRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateNetworkAclRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `VpcId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
}

/// EC2 CreateNetworkInterfaceRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateNetworkInterfaceRequest {
    /// Query parameter: `Description`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `SecurityGroupId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,
    /// Query parameter: `PrivateIpAddress`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_ip_address: Option<String>,
    /// Query parameter: `PrivateIpAddresses`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub private_ip_addresses: Vec<PrivateIpAddressSpecification>,
    /// Query parameter: `SecondaryPrivateIpAddressCount`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_private_ip_address_count: Option<i32>,
    /// Query parameter: `SubnetId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
}

/// EC2 CreatePlacementGroupRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreatePlacementGroupRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `GroupName`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    /// Query parameter: `Strategy`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
}

/// EC2 CreateReservedInstancesListingRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateReservedInstancesListingRequest {
    /// Query parameter: `ClientToken`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    /// Query parameter: `InstanceCount`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_count: Option<i32>,
    /// Query parameter: `PriceSchedules`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub price_schedules: Vec<PriceScheduleSpecification>,
    /// Query parameter: `ReservedInstancesId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_instances_id: Option<String>,
}

/// EC2 CreateRouteRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateRouteRequest {
    /// Query parameter: `DestinationCidrBlock`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_cidr_block: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `GatewayId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_id: Option<String>,
    /// Query parameter: `InstanceId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    /// Query parameter: `NetworkInterfaceId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_interface_id: Option<String>,
    /// Query parameter: `RouteTableId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_table_id: Option<String>,
    /// Query parameter: `VpcPeeringConnectionId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_peering_connection_id: Option<String>,
}

/// EC2 CreateRouteTableRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateRouteTableRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `VpcId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
}

/// EC2 CreateSecurityGroupRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateSecurityGroupRequest {
    /// Query parameter: `GroupDescription`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `GroupName`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    /// Query parameter: `VpcId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
}

/// EC2 CreateSnapshotRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateSnapshotRequest {
    /// Query parameter: `Description`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `VolumeId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_id: Option<String>,
}

/// EC2 CreateSpotDatafeedSubscriptionRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateSpotDatafeedSubscriptionRequest {
    /// Query parameter: `Bucket`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Prefix`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

/// EC2 CreateSubnetRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateSubnetRequest {
    /// Query parameter: `AvailabilityZone`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    /// Query parameter: `CidrBlock`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidr_block: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `VpcId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
}

/// EC2 CreateTagsRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateTagsRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `ResourceId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<String>,
    /// Query parameter: `Tag`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

/// EC2 CreateVolumeRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateVolumeRequest {
    /// Query parameter: `AvailabilityZone`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Encrypted`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted: Option<bool>,
    /// Query parameter: `Iops`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iops: Option<i32>,
    /// Query parameter: `KmsKeyId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    /// Query parameter: `Size`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i32>,
    /// Query parameter: `SnapshotId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
    /// Query parameter: `VolumeType`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_type: Option<String>,
}

/// EC2 CreateVpcPeeringConnectionRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateVpcPeeringConnectionRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `PeerOwnerId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer_owner_id: Option<String>,
    /// Query parameter: `PeerVpcId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer_vpc_id: Option<String>,
    /// Query parameter: `VpcId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
}

/// EC2 CreateVpcRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateVpcRequest {
    /// Query parameter: `CidrBlock`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidr_block: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `InstanceTenancy`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_tenancy: Option<String>,
}

/// EC2 CreateVpnConnectionRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateVpnConnectionRequest {
    /// Query parameter: `CustomerGatewayId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_gateway_id: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Options`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<VpnConnectionOptionsSpecification>,
    /// Query parameter: `Type`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    /// Query parameter: `VpnGatewayId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpn_gateway_id: Option<String>,
}

/// EC2 CreateVpnConnectionRouteRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateVpnConnectionRouteRequest {
    /// Query parameter: `DestinationCidrBlock`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_cidr_block: Option<String>,
    /// Query parameter: `VpnConnectionId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpn_connection_id: Option<String>,
}

/// EC2 CreateVpnGatewayRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateVpnGatewayRequest {
    /// Query parameter: `AvailabilityZone`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Type`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

/// EC2 DeleteCustomerGatewayRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteCustomerGatewayRequest {
    /// Query parameter: `CustomerGatewayId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_gateway_id: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

/// EC2 DeleteDhcpOptionsRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteDhcpOptionsRequest {
    /// Query parameter: `DhcpOptionsId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dhcp_options_id: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

/// EC2 DeleteInternetGatewayRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteInternetGatewayRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `InternetGatewayId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internet_gateway_id: Option<String>,
}

/// EC2 DeleteKeyPairRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteKeyPairRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `KeyName`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
}

/// EC2 DeleteNetworkAclEntryRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteNetworkAclEntryRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Egress`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub egress: Option<bool>,
    /// Query parameter: `NetworkAclId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_acl_id: Option<String>,
    /// Query parameter: `RuleNumber`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_number: Option<i32>,
}

/// EC2 DeleteNetworkAclRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteNetworkAclRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `NetworkAclId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_acl_id: Option<String>,
}

/// EC2 DeleteNetworkInterfaceRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteNetworkInterfaceRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `NetworkInterfaceId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_interface_id: Option<String>,
}

/// EC2 DeletePlacementGroupRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeletePlacementGroupRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `GroupName`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
}

/// EC2 DeleteRouteRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteRouteRequest {
    /// Query parameter: `DestinationCidrBlock`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_cidr_block: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `RouteTableId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_table_id: Option<String>,
}

/// EC2 DeleteRouteTableRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteRouteTableRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `RouteTableId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_table_id: Option<String>,
}

/// EC2 DeleteSecurityGroupRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteSecurityGroupRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `GroupId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// Query parameter: `GroupName`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
}

/// EC2 DeleteSnapshotRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteSnapshotRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `SnapshotId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
}

/// EC2 DeleteSpotDatafeedSubscriptionRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteSpotDatafeedSubscriptionRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

/// EC2 DeleteSubnetRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteSubnetRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `SubnetId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
}

/// EC2 DeleteTagsRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteTagsRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `ResourceId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<String>,
    /// Query parameter: `Tag`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

/// EC2 DeleteVolumeRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteVolumeRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `VolumeId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_id: Option<String>,
}

/// EC2 DeleteVpcPeeringConnectionRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteVpcPeeringConnectionRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `VpcPeeringConnectionId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_peering_connection_id: Option<String>,
}

/// EC2 DeleteVpcRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteVpcRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `VpcId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
}

/// EC2 DeleteVpnConnectionRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteVpnConnectionRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `VpnConnectionId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpn_connection_id: Option<String>,
}

/// EC2 DeleteVpnConnectionRouteRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteVpnConnectionRouteRequest {
    /// Query parameter: `DestinationCidrBlock`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_cidr_block: Option<String>,
    /// Query parameter: `VpnConnectionId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpn_connection_id: Option<String>,
}

/// EC2 DeleteVpnGatewayRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteVpnGatewayRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `VpnGatewayId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpn_gateway_id: Option<String>,
}

/// EC2 DeregisterImageRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeregisterImageRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `ImageId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
}

/// EC2 DescribeAccountAttributesRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeAccountAttributesRequest {
    /// Query parameter: `AttributeName`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attribute_names: Vec<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

/// EC2 DescribeAddressesRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeAddressesRequest {
    /// Query parameter: `AllocationId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allocation_ids: Vec<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Filter`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    /// Query parameter: `PublicIp`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub public_ips: Vec<String>,
}

/// EC2 DescribeAvailabilityZonesRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeAvailabilityZonesRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Filter`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    /// Query parameter: `ZoneName`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub zone_names: Vec<String>,
}

/// EC2 DescribeBundleTasksRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeBundleTasksRequest {
    /// Query parameter: `BundleId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bundle_ids: Vec<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Filter`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
}

/// EC2 DescribeConversionTasksRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeConversionTasksRequest {
    /// Query parameter: `ConversionTaskId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conversion_task_ids: Vec<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Filter`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
}

/// EC2 DescribeCustomerGatewaysRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeCustomerGatewaysRequest {
    /// Query parameter: `CustomerGatewayId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub customer_gateway_ids: Vec<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Filter`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
}

/// EC2 DescribeDhcpOptionsRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeDhcpOptionsRequest {
    /// Query parameter: `DhcpOptionsId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dhcp_options_ids: Vec<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Filter`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
}

/// EC2 DescribeExportTasksRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeExportTasksRequest {
    /// Query parameter: `ExportTaskId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub export_task_ids: Vec<String>,
}

/// EC2 DescribeImageAttributeRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeImageAttributeRequest {
    /// Query parameter: `Attribute`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `ImageId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
}

/// EC2 DescribeImagesRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeImagesRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `ExecutableBy`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub executable_users: Vec<String>,
    /// Query parameter: `Filter`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    /// Query parameter: `ImageId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub image_ids: Vec<String>,
    /// Query parameter: `Owner`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub owners: Vec<String>,
}

/// EC2 DescribeInstanceAttributeRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeInstanceAttributeRequest {
    /// Query parameter: `Attribute`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `InstanceId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
}

/// EC2 DescribeInstanceStatusRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeInstanceStatusRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Filter`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    /// Query parameter: `IncludeAllInstances`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_all_instances: Option<bool>,
    /// Query parameter: `InstanceId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub instance_ids: Vec<String>,
    /// Query parameter: `MaxResults`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Query parameter: `NextToken`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// EC2 DescribeInstancesRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeInstancesRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Filter`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    /// Query parameter: `InstanceId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub instance_ids: Vec<String>,
    /// Query parameter: `MaxResults`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Query parameter: `NextToken`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// EC2 DescribeInternetGatewaysRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeInternetGatewaysRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Filter`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    /// Query parameter: `InternetGatewayId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub internet_gateway_ids: Vec<String>,
}

/// EC2 DescribeKeyPairsRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeKeyPairsRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Filter`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    /// Query parameter: `KeyName`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub key_names: Vec<String>,
}

/// EC2 DescribeNetworkAclsRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeNetworkAclsRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Filter`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    /// Query parameter: `NetworkAclId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub network_acl_ids: Vec<String>,
}

/// EC2 DescribeNetworkInterfaceAttributeRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeNetworkInterfaceAttributeRequest {
    /// Query parameter: `Attribute`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `NetworkInterfaceId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_interface_id: Option<String>,
}

/// EC2 DescribeNetworkInterfacesRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeNetworkInterfacesRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Filter`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    /// Query parameter: `NetworkInterfaceId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub network_interface_ids: Vec<String>,
}

/// EC2 DescribePlacementGroupsRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribePlacementGroupsRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Filter`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    /// Query parameter: `GroupName`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub group_names: Vec<String>,
}

/// EC2 DescribeRegionsRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeRegionsRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Filter`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    /// Query parameter: `RegionName`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub region_names: Vec<String>,
}

/// EC2 DescribeReservedInstancesListingsRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeReservedInstancesListingsRequest {
    /// Query parameter: `Filters`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    /// Query parameter: `ReservedInstancesId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_instances_id: Option<String>,
    /// Query parameter: `ReservedInstancesListingId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_instances_listing_id: Option<String>,
}

/// EC2 DescribeReservedInstancesModificationsRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeReservedInstancesModificationsRequest {
    /// Query parameter: `Filter`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    /// Query parameter: `NextToken`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Query parameter: `ReservedInstancesModificationId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reserved_instances_modification_ids: Vec<String>,
}

/// EC2 DescribeReservedInstancesOfferingsRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeReservedInstancesOfferingsRequest {
    /// Query parameter: `AvailabilityZone`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Filter`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    /// Query parameter: `IncludeMarketplace`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_marketplace: Option<bool>,
    /// Query parameter: `InstanceTenancy`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_tenancy: Option<String>,
    /// Query parameter: `InstanceType`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    /// Query parameter: `MaxDuration`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_duration: Option<i64>,
    /// Query parameter: `MaxInstanceCount`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_instance_count: Option<i32>,
    /// Query parameter: `MaxResults`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Query parameter: `MinDuration`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_duration: Option<i64>,
    /// Query parameter: `NextToken`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Query parameter: `OfferingType`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offering_type: Option<String>,
    /// Query parameter: `ProductDescription`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_description: Option<String>,
    /// Query parameter: `ReservedInstancesOfferingId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reserved_instances_offering_ids: Vec<String>,
}

/// EC2 DescribeReservedInstancesRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeReservedInstancesRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Filter`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    /// Query parameter: `OfferingType`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offering_type: Option<String>,
    /// Query parameter: `ReservedInstancesId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reserved_instances_ids: Vec<String>,
}

/// EC2 DescribeRouteTablesRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeRouteTablesRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Filter`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    /// Query parameter: `RouteTableId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub route_table_ids: Vec<String>,
}

/// EC2 DescribeSecurityGroupsRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeSecurityGroupsRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Filter`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    /// Query parameter: `GroupId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub group_ids: Vec<String>,
    /// Query parameter: `GroupName`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub group_names: Vec<String>,
}

/// EC2 DescribeSnapshotAttributeRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeSnapshotAttributeRequest {
    /// Query parameter: `Attribute`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `SnapshotId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
}

/// EC2 DescribeSnapshotsRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeSnapshotsRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Filter`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    /// Query parameter: `Owner`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub owner_ids: Vec<String>,
    /// Query parameter: `RestorableBy`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub restorable_by_user_ids: Vec<String>,
    /// Query parameter: `SnapshotId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub snapshot_ids: Vec<String>,
}

/// EC2 DescribeSpotDatafeedSubscriptionRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeSpotDatafeedSubscriptionRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

/// EC2 DescribeSpotInstanceRequestsRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeSpotInstanceRequestsRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Filter`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    /// Query parameter: `SpotInstanceRequestId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub spot_instance_request_ids: Vec<String>,
}

/// EC2 DescribeSpotPriceHistoryRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeSpotPriceHistoryRequest {
    /// Query parameter: `AvailabilityZone`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `EndTime`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<chrono::DateTime<chrono::Utc>>,
    /// Query parameter: `Filter`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    /// Query parameter: `InstanceType`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub instance_types: Vec<String>,
    /// Query parameter: `MaxResults`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Query parameter: `NextToken`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Query parameter: `ProductDescription`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub product_descriptions: Vec<String>,
    /// Query parameter: `StartTime`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<chrono::DateTime<chrono::Utc>>,
}

/// EC2 DescribeSubnetsRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeSubnetsRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Filter`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    /// Query parameter: `SubnetId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subnet_ids: Vec<String>,
}

/// EC2 DescribeTagsRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeTagsRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Filter`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    /// Query parameter: `MaxResults`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Query parameter: `NextToken`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// EC2 DescribeVolumeAttributeRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeVolumeAttributeRequest {
    /// Query parameter: `Attribute`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `VolumeId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_id: Option<String>,
}

/// EC2 DescribeVolumeStatusRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeVolumeStatusRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Filter`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    /// Query parameter: `MaxResults`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Query parameter: `NextToken`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Query parameter: `VolumeId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub volume_ids: Vec<String>,
}

/// EC2 DescribeVolumesRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeVolumesRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Filter`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    /// Query parameter: `MaxResults`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Query parameter: `NextToken`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Query parameter: `VolumeId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub volume_ids: Vec<String>,
}

/// EC2 DescribeVpcAttributeRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeVpcAttributeRequest {
    /// Query parameter: `Attribute`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `VpcId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
}

/// EC2 DescribeVpcPeeringConnectionsRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeVpcPeeringConnectionsRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Filter`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    /// Query parameter: `VpcPeeringConnectionId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vpc_peering_connection_ids: Vec<String>,
}

/// EC2 DescribeVpcsRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeVpcsRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Filter`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    /// Query parameter: `VpcId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vpc_ids: Vec<String>,
}

/// EC2 DescribeVpnConnectionsRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeVpnConnectionsRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Filter`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    /// Query parameter: `VpnConnectionId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vpn_connection_ids: Vec<String>,
}

/// EC2 DescribeVpnGatewaysRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeVpnGatewaysRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Filter`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    /// Query parameter: `VpnGatewayId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vpn_gateway_ids: Vec<String>,
}

/// EC2 DetachInternetGatewayRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DetachInternetGatewayRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `InternetGatewayId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internet_gateway_id: Option<String>,
    /// Query parameter: `VpcId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
}

/// EC2 DetachNetworkInterfaceRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DetachNetworkInterfaceRequest {
    /// Query parameter: `AttachmentId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_id: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Force`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
}

/// EC2 DetachVolumeRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DetachVolumeRequest {
    /// Query parameter: `Device`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Force`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
    /// Query parameter: `InstanceId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    /// Query parameter: `VolumeId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_id: Option<String>,
}

/// EC2 DetachVpnGatewayRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DetachVpnGatewayRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `VpcId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    /// Query parameter: `VpnGatewayId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpn_gateway_id: Option<String>,
}

/// EC2 DisableVgwRoutePropagationRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DisableVgwRoutePropagationRequest {
    /// Query parameter: `GatewayId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_id: Option<String>,
    /// Query parameter: `RouteTableId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_table_id: Option<String>,
}

/// EC2 DisassociateAddressRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DisassociateAddressRequest {
    /// Query parameter: `AssociationId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_id: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `PublicIp`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_ip: Option<String>,
}

/// EC2 DisassociateRouteTableRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DisassociateRouteTableRequest {
    /// Query parameter: `AssociationId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_id: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

/// EC2 EnableVgwRoutePropagationRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EnableVgwRoutePropagationRequest {
    /// Query parameter: `GatewayId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_id: Option<String>,
    /// Query parameter: `RouteTableId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_table_id: Option<String>,
}

/// EC2 EnableVolumeIoRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EnableVolumeIoRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `VolumeId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_id: Option<String>,
}

/// EC2 GetConsoleOutputRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetConsoleOutputRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `InstanceId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
}

/// EC2 GetPasswordDataRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetPasswordDataRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `InstanceId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
}

/// EC2 ImportInstanceRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ImportInstanceRequest {
    /// Query parameter: `Description`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Query parameter: `DiskImage`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub disk_images: Vec<DiskImage>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `LaunchSpecification`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_specification: Option<ImportInstanceLaunchSpecification>,
    /// Query parameter: `Platform`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

/// EC2 ImportKeyPairRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ImportKeyPairRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `KeyName`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
    /// Query parameter: `PublicKeyMaterial`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key_material: Option<Blob>,
}

/// EC2 ImportVolumeRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ImportVolumeRequest {
    /// Query parameter: `AvailabilityZone`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    /// Query parameter: `Description`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Image`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<DiskImageDetail>,
    /// Query parameter: `Volume`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<VolumeDetail>,
}

/// EC2 ModifyImageAttributeRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ModifyImageAttributeRequest {
    /// Query parameter: `Attribute`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    /// Query parameter: `Description`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<AttributeValue>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `ImageId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    /// Query parameter: `LaunchPermission`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_permission: Option<LaunchPermissionModifications>,
    /// Query parameter: `OperationType`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_type: Option<String>,
    /// Query parameter: `ProductCode`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub product_codes: Vec<String>,
    /// Query parameter: `UserGroup`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_groups: Vec<String>,
    /// Query parameter: `UserId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_ids: Vec<String>,
    /// Query parameter: `Value`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// EC2 ModifyInstanceAttributeRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ModifyInstanceAttributeRequest {
    /// Query parameter: `Attribute`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    /// Query parameter: `BlockDeviceMapping`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub block_device_mappings: Vec<InstanceBlockDeviceMappingSpecification>,
    /// Query parameter: `DisableApiTermination`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_api_termination: Option<AttributeBooleanValue>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `EbsOptimized`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebs_optimized: Option<AttributeBooleanValue>,
    /// Query parameter: `GroupId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,
    /// Query parameter: `InstanceId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    /// Query parameter: `InstanceInitiatedShutdownBehavior`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_initiated_shutdown_behavior: Option<AttributeValue>,
    /// Query parameter: `InstanceType`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<AttributeValue>,
    /// Query parameter: `Kernel`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kernel: Option<AttributeValue>,
    /// Query parameter: `Ramdisk`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ramdisk: Option<AttributeValue>,
    /// Query parameter: `SourceDestCheck`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_dest_check: Option<AttributeBooleanValue>,
    /// Query parameter: `SriovNetSupport`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sriov_net_support: Option<AttributeValue>,
    /// Query parameter: `UserData`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<BlobAttributeValue>,
    /// Query parameter: `Value`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// EC2 ModifyNetworkInterfaceAttributeRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ModifyNetworkInterfaceAttributeRequest {
    /// Query parameter: `Attachment`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<NetworkInterfaceAttachmentChanges>,
    /// Query parameter: `Description`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<AttributeValue>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `SecurityGroupId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,
    /// Query parameter: `NetworkInterfaceId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_interface_id: Option<String>,
    /// Query parameter: `SourceDestCheck`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_dest_check: Option<AttributeBooleanValue>,
}

/// EC2 ModifyReservedInstancesRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ModifyReservedInstancesRequest {
    /// Query parameter: `ClientToken`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    /// Query parameter: `ReservedInstancesId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reserved_instances_ids: Vec<String>,
    /// Query parameter: `ReservedInstancesConfigurationSetItemType`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub target_configurations: Vec<ReservedInstancesConfiguration>,
}

/// EC2 ModifySnapshotAttributeRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ModifySnapshotAttributeRequest {
    /// Query parameter: `Attribute`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    /// Query parameter: `CreateVolumePermission`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_volume_permission: Option<CreateVolumePermissionModifications>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `UserGroup`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub group_names: Vec<String>,
    /// Query parameter: `OperationType`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_type: Option<String>,
    /// Query parameter: `SnapshotId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
    /// Query parameter: `UserId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_ids: Vec<String>,
}

/// EC2 ModifySubnetAttributeRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ModifySubnetAttributeRequest {
    /// Query parameter: `MapPublicIpOnLaunch`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_public_ip_on_launch: Option<AttributeBooleanValue>,
    /// Query parameter: `SubnetId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
}

/// EC2 ModifyVolumeAttributeRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ModifyVolumeAttributeRequest {
    /// Query parameter: `AutoEnableIO`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_enable_io: Option<AttributeBooleanValue>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `VolumeId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_id: Option<String>,
}

/// EC2 ModifyVpcAttributeRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ModifyVpcAttributeRequest {
    /// Query parameter: `EnableDnsHostnames`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_dns_hostnames: Option<AttributeBooleanValue>,
    /// Query parameter: `EnableDnsSupport`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_dns_support: Option<AttributeBooleanValue>,
    /// Query parameter: `VpcId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
}

/// EC2 MonitorInstancesRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MonitorInstancesRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `InstanceId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub instance_ids: Vec<String>,
}

/// EC2 PurchaseReservedInstancesOfferingRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PurchaseReservedInstancesOfferingRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `InstanceCount`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_count: Option<i32>,
    /// Query parameter: `LimitPrice`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_price: Option<ReservedInstanceLimitPrice>,
    /// Query parameter: `ReservedInstancesOfferingId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_instances_offering_id: Option<String>,
}

/// EC2 RebootInstancesRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RebootInstancesRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `InstanceId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub instance_ids: Vec<String>,
}

/// EC2 RegisterImageRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RegisterImageRequest {
    /// Query parameter: `Architecture`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,
    /// Query parameter: `BlockDeviceMapping`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub block_device_mappings: Vec<BlockDeviceMapping>,
    /// Query parameter: `Description`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `ImageLocation`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_location: Option<String>,
    /// Query parameter: `KernelId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kernel_id: Option<String>,
    /// Query parameter: `Name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Query parameter: `RamdiskId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ramdisk_id: Option<String>,
    /// Query parameter: `RootDeviceName`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_device_name: Option<String>,
    /// Query parameter: `SriovNetSupport`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sriov_net_support: Option<String>,
    /// Query parameter: `VirtualizationType`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtualization_type: Option<String>,
}

/// EC2 RejectVpcPeeringConnectionRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RejectVpcPeeringConnectionRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `VpcPeeringConnectionId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_peering_connection_id: Option<String>,
}

/// EC2 ReleaseAddressRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReleaseAddressRequest {
    /// Query parameter: `AllocationId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation_id: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `PublicIp`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_ip: Option<String>,
}

/// EC2 ReplaceNetworkAclAssociationRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReplaceNetworkAclAssociationRequest {
    /// Query parameter: `AssociationId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_id: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `NetworkAclId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_acl_id: Option<String>,
}

/// EC2 ReplaceNetworkAclEntryRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReplaceNetworkAclEntryRequest {
    /// Query parameter: `CidrBlock`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidr_block: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Egress`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub egress: Option<bool>,
    /// Query parameter: `Icmp`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icmp_type_code: Option<IcmpTypeCode>,
    /// Query parameter: `NetworkAclId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_acl_id: Option<String>,
    /// Query parameter: `PortRange`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_range: Option<PortRange>,
    /// Query parameter: `Protocol`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    /// Query parameter: `RuleAction`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_action: Option<String>,
    /// Query parameter: `RuleNumber`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_number: Option<i32>,
}

/// EC2 ReplaceRouteRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReplaceRouteRequest {
    /// Query parameter: `DestinationCidrBlock`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_cidr_block: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `GatewayId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_id: Option<String>,
    /// Query parameter: `InstanceId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    /// Query parameter: `NetworkInterfaceId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_interface_id: Option<String>,
    /// Query parameter: `RouteTableId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_table_id: Option<String>,
    /// Query parameter: `VpcPeeringConnectionId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_peering_connection_id: Option<String>,
}

/// EC2 ReplaceRouteTableAssociationRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReplaceRouteTableAssociationRequest {
    /// Query parameter: `AssociationId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_id: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `RouteTableId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_table_id: Option<String>,
}

/// EC2 ReportInstanceStatusRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReportInstanceStatusRequest {
    /// Query parameter: `Description`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `EndTime`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<chrono::DateTime<chrono::Utc>>,
    /// Query parameter: `InstanceId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub instances: Vec<String>,
    /// Query parameter: `ReasonCode`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reason_codes: Vec<String>,
    /// Query parameter: `StartTime`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<chrono::DateTime<chrono::Utc>>,
    /// Query parameter: `Status`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// EC2 RequestSpotInstancesRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RequestSpotInstancesRequest {
    /// Query parameter: `AvailabilityZoneGroup`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone_group: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `InstanceCount`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_count: Option<i32>,
    /// Query parameter: `LaunchGroup`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_group: Option<String>,
    /// Query parameter: `LaunchSpecification`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_specification: Option<RequestSpotLaunchSpecification>,
    /// Query parameter: `SpotPrice`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spot_price: Option<String>,
    /// Query parameter: `Type`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    /// Query parameter: `ValidFrom`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<chrono::DateTime<chrono::Utc>>,
    /// Query parameter: `ValidUntil`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<chrono::DateTime<chrono::Utc>>,
}

/// EC2 ResetImageAttributeRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ResetImageAttributeRequest {
    /// Query parameter: `Attribute`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `ImageId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
}

/// EC2 ResetInstanceAttributeRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ResetInstanceAttributeRequest {
    /// Query parameter: `Attribute`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `InstanceId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
}

/// EC2 ResetNetworkInterfaceAttributeRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ResetNetworkInterfaceAttributeRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `NetworkInterfaceId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_interface_id: Option<String>,
    /// Query parameter: `SourceDestCheck`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_dest_check: Option<String>,
}

/// EC2 ResetSnapshotAttributeRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ResetSnapshotAttributeRequest {
    /// Query parameter: `Attribute`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `SnapshotId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
}

/// EC2 RevokeSecurityGroupEgressRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RevokeSecurityGroupEgressRequest {
    /// Query parameter: `CidrIp`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidr_ip: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `FromPort`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_port: Option<i32>,
    /// Query parameter: `GroupId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// Query parameter: `IpPermissions`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ip_permissions: Vec<IpPermission>,
    /// Query parameter: `IpProtocol`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_protocol: Option<String>,
    /// Query parameter: `SourceSecurityGroupName`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_security_group_name: Option<String>,
    /// Query parameter: `SourceSecurityGroupOwnerId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_security_group_owner_id: Option<String>,
    /// Query parameter: `ToPort`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_port: Option<i32>,
}

/// EC2 RevokeSecurityGroupIngressRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RevokeSecurityGroupIngressRequest {
    /// Query parameter: `CidrIp`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidr_ip: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `FromPort`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_port: Option<i32>,
    /// Query parameter: `GroupId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// Query parameter: `GroupName`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    /// Query parameter: `IpPermissions`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ip_permissions: Vec<IpPermission>,
    /// Query parameter: `IpProtocol`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_protocol: Option<String>,
    /// Query parameter: `SourceSecurityGroupName`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_security_group_name: Option<String>,
    /// Query parameter: `SourceSecurityGroupOwnerId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_security_group_owner_id: Option<String>,
    /// Query parameter: `ToPort`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_port: Option<i32>,
}

/// EC2 RunInstancesRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RunInstancesRequest {
    /// Query parameter: `AdditionalInfo`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
    /// Query parameter: `BlockDeviceMapping`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub block_device_mappings: Vec<BlockDeviceMapping>,
    /// Query parameter: `ClientToken`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    /// Query parameter: `DisableApiTermination`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_api_termination: Option<bool>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `EbsOptimized`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebs_optimized: Option<bool>,
    /// Query parameter: `IamInstanceProfile`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_instance_profile: Option<IamInstanceProfileSpecification>,
    /// Query parameter: `ImageId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    /// Query parameter: `InstanceInitiatedShutdownBehavior`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_initiated_shutdown_behavior: Option<String>,
    /// Query parameter: `InstanceType`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    /// Query parameter: `KernelId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kernel_id: Option<String>,
    /// Query parameter: `KeyName`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
    /// Query parameter: `MaxCount`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_count: Option<i32>,
    /// Query parameter: `MinCount`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_count: Option<i32>,
    /// Query parameter: `Monitoring`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring: Option<RunInstancesMonitoringEnabled>,
    /// Query parameter: `NetworkInterface`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub network_interfaces: Vec<InstanceNetworkInterfaceSpecification>,
    /// Query parameter: `Placement`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<Placement>,
    /// Query parameter: `PrivateIpAddress`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_ip_address: Option<String>,
    /// Query parameter: `RamdiskId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ramdisk_id: Option<String>,
    /// Query parameter: `SecurityGroupId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub security_group_ids: Vec<String>,
    /// Query parameter: `SecurityGroup`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub security_groups: Vec<String>,
    /// Query parameter: `SubnetId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    /// Query parameter: `UserData`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
}

/// EC2 StartInstancesRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StartInstancesRequest {
    /// Query parameter: `AdditionalInfo`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `InstanceId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub instance_ids: Vec<String>,
}

/// EC2 StopInstancesRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StopInstancesRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `Force`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
    /// Query parameter: `InstanceId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub instance_ids: Vec<String>,
}

/// EC2 TerminateInstancesRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TerminateInstancesRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `InstanceId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub instance_ids: Vec<String>,
}

/// EC2 UnassignPrivateIpAddressesRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UnassignPrivateIpAddressesRequest {
    /// Query parameter: `NetworkInterfaceId`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_interface_id: Option<String>,
    /// Query parameter: `PrivateIpAddress`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub private_ip_addresses: Vec<String>,
}

/// EC2 UnmonitorInstancesRequest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UnmonitorInstancesRequest {
    /// Query parameter: `DryRun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Query parameter: `InstanceId`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub instance_ids: Vec<String>,
}
