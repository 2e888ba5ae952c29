//! Auto-generated from the Amazon EC2 2014-10-01 API model. DO NOT EDIT.
//!
//! EC2 query serialization for every shape reachable from a request.

use awsbind_query::{QueryParams, QuerySerialize, member_key};

use crate::{input, types};

impl QuerySerialize for input::AcceptVpcPeeringConnectionRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.vpc_peering_connection_id
            .serialize_query(&member_key(prefix, "VpcPeeringConnectionId"), params);
    }
}

impl QuerySerialize for input::AllocateAddressRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.domain
            .serialize_query(&member_key(prefix, "Domain"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
    }
}

impl QuerySerialize for input::AssignPrivateIpAddressesRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.allow_reassignment
            .serialize_query(&member_key(prefix, "AllowReassignment"), params);
        self.network_interface_id
            .serialize_query(&member_key(prefix, "NetworkInterfaceId"), params);
        self.private_ip_addresses
            .serialize_query(&member_key(prefix, "PrivateIpAddress"), params);
        self.secondary_private_ip_address_count
            .serialize_query(&member_key(prefix, "SecondaryPrivateIpAddressCount"), params);
    }
}

impl QuerySerialize for input::AssociateAddressRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.allocation_id
            .serialize_query(&member_key(prefix, "AllocationId"), params);
        self.allow_reassociation
            .serialize_query(&member_key(prefix, "AllowReassociation"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.instance_id
            .serialize_query(&member_key(prefix, "InstanceId"), params);
        self.network_interface_id
            .serialize_query(&member_key(prefix, "NetworkInterfaceId"), params);
        self.private_ip_address
            .serialize_query(&member_key(prefix, "PrivateIpAddress"), params);
        self.public_ip
            .serialize_query(&member_key(prefix, "PublicIp"), params);
    }
}

impl QuerySerialize for input::AssociateDhcpOptionsRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dhcp_options_id
            .serialize_query(&member_key(prefix, "DhcpOptionsId"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.vpc_id
            .serialize_query(&member_key(prefix, "VpcId"), params);
    }
}

impl QuerySerialize for input::AssociateRouteTableRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.route_table_id
            .serialize_query(&member_key(prefix, "RouteTableId"), params);
        self.subnet_id
            .serialize_query(&member_key(prefix, "SubnetId"), params);
    }
}

impl QuerySerialize for input::AttachInternetGatewayRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.internet_gateway_id
            .serialize_query(&member_key(prefix, "InternetGatewayId"), params);
        self.vpc_id
            .serialize_query(&member_key(prefix, "VpcId"), params);
    }
}

impl QuerySerialize for input::AttachNetworkInterfaceRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.device_index
            .serialize_query(&member_key(prefix, "DeviceIndex"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.instance_id
            .serialize_query(&member_key(prefix, "InstanceId"), params);
        self.network_interface_id
            .serialize_query(&member_key(prefix, "NetworkInterfaceId"), params);
    }
}

impl QuerySerialize for input::AttachVolumeRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.device
            .serialize_query(&member_key(prefix, "Device"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.instance_id
            .serialize_query(&member_key(prefix, "InstanceId"), params);
        self.volume_id
            .serialize_query(&member_key(prefix, "VolumeId"), params);
    }
}

impl QuerySerialize for input::AttachVpnGatewayRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.vpc_id
            .serialize_query(&member_key(prefix, "VpcId"), params);
        self.vpn_gateway_id
            .serialize_query(&member_key(prefix, "VpnGatewayId"), params);
    }
}

impl QuerySerialize for types::AttributeBooleanValue {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.value
            .serialize_query(&member_key(prefix, "Value"), params);
    }
}

impl QuerySerialize for types::AttributeValue {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.value
            .serialize_query(&member_key(prefix, "Value"), params);
    }
}

impl QuerySerialize for input::AuthorizeSecurityGroupEgressRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.cidr_ip
            .serialize_query(&member_key(prefix, "CidrIp"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.from_port
            .serialize_query(&member_key(prefix, "FromPort"), params);
        self.group_id
            .serialize_query(&member_key(prefix, "GroupId"), params);
        self.ip_permissions
            .serialize_query(&member_key(prefix, "IpPermissions"), params);
        self.ip_protocol
            .serialize_query(&member_key(prefix, "IpProtocol"), params);
        self.source_security_group_name
            .serialize_query(&member_key(prefix, "SourceSecurityGroupName"), params);
        self.source_security_group_owner_id
            .serialize_query(&member_key(prefix, "SourceSecurityGroupOwnerId"), params);
        self.to_port
            .serialize_query(&member_key(prefix, "ToPort"), params);
    }
}

impl QuerySerialize for input::AuthorizeSecurityGroupIngressRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.cidr_ip
            .serialize_query(&member_key(prefix, "CidrIp"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.from_port
            .serialize_query(&member_key(prefix, "FromPort"), params);
        self.group_id
            .serialize_query(&member_key(prefix, "GroupId"), params);
        self.group_name
            .serialize_query(&member_key(prefix, "GroupName"), params);
        self.ip_permissions
            .serialize_query(&member_key(prefix, "IpPermissions"), params);
        self.ip_protocol
            .serialize_query(&member_key(prefix, "IpProtocol"), params);
        self.source_security_group_name
            .serialize_query(&member_key(prefix, "SourceSecurityGroupName"), params);
        self.source_security_group_owner_id
            .serialize_query(&member_key(prefix, "SourceSecurityGroupOwnerId"), params);
        self.to_port
            .serialize_query(&member_key(prefix, "ToPort"), params);
    }
}

impl QuerySerialize for types::BlobAttributeValue {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.value
            .serialize_query(&member_key(prefix, "Value"), params);
    }
}

impl QuerySerialize for types::BlockDeviceMapping {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.device_name
            .serialize_query(&member_key(prefix, "DeviceName"), params);
        self.ebs
            .serialize_query(&member_key(prefix, "Ebs"), params);
        self.no_device
            .serialize_query(&member_key(prefix, "NoDevice"), params);
        self.virtual_name
            .serialize_query(&member_key(prefix, "VirtualName"), params);
    }
}

impl QuerySerialize for input::BundleInstanceRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.instance_id
            .serialize_query(&member_key(prefix, "InstanceId"), params);
        self.storage
            .serialize_query(&member_key(prefix, "Storage"), params);
    }
}

impl QuerySerialize for input::CancelBundleTaskRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.bundle_id
            .serialize_query(&member_key(prefix, "BundleId"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
    }
}

impl QuerySerialize for input::CancelConversionRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.conversion_task_id
            .serialize_query(&member_key(prefix, "ConversionTaskId"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.reason_message
            .serialize_query(&member_key(prefix, "ReasonMessage"), params);
    }
}

impl QuerySerialize for input::CancelExportTaskRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.export_task_id
            .serialize_query(&member_key(prefix, "ExportTaskId"), params);
    }
}

impl QuerySerialize for input::CancelReservedInstancesListingRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.reserved_instances_listing_id
            .serialize_query(&member_key(prefix, "ReservedInstancesListingId"), params);
    }
}

impl QuerySerialize for input::CancelSpotInstanceRequestsRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.spot_instance_request_ids
            .serialize_query(&member_key(prefix, "SpotInstanceRequestId"), params);
    }
}

impl QuerySerialize for input::ConfirmProductInstanceRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.instance_id
            .serialize_query(&member_key(prefix, "InstanceId"), params);
        self.product_code
            .serialize_query(&member_key(prefix, "ProductCode"), params);
    }
}

impl QuerySerialize for input::CopyImageRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.client_token
            .serialize_query(&member_key(prefix, "ClientToken"), params);
        self.description
            .serialize_query(&member_key(prefix, "Description"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.name
            .serialize_query(&member_key(prefix, "Name"), params);
        self.source_image_id
            .serialize_query(&member_key(prefix, "SourceImageId"), params);
        self.source_region
            .serialize_query(&member_key(prefix, "SourceRegion"), params);
    }
}

impl QuerySerialize for input::CopySnapshotRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.description
            .serialize_query(&member_key(prefix, "Description"), params);
        self.destination_region
            .serialize_query(&member_key(prefix, "DestinationRegion"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.presigned_url
            .serialize_query(&member_key(prefix, "PresignedUrl"), params);
        self.source_region
            .serialize_query(&member_key(prefix, "SourceRegion"), params);
        self.source_snapshot_id
            .serialize_query(&member_key(prefix, "SourceSnapshotId"), params);
    }
}

impl QuerySerialize for input::CreateCustomerGatewayRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.bgp_asn
            .serialize_query(&member_key(prefix, "BgpAsn"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.public_ip
            .serialize_query(&member_key(prefix, "IpAddress"), params);
        self.r#type
            .serialize_query(&member_key(prefix, "Type"), params);
    }
}

impl QuerySerialize for input::CreateDhcpOptionsRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dhcp_configurations
            .serialize_query(&member_key(prefix, "DhcpConfiguration"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
    }
}

impl QuerySerialize for input::CreateImageRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.block_device_mappings
            .serialize_query(&member_key(prefix, "BlockDeviceMapping"), params);
        self.description
            .serialize_query(&member_key(prefix, "Description"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.instance_id
            .serialize_query(&member_key(prefix, "InstanceId"), params);
        self.name
            .serialize_query(&member_key(prefix, "Name"), params);
        self.no_reboot
            .serialize_query(&member_key(prefix, "NoReboot"), params);
    }
}

impl QuerySerialize for input::CreateInstanceExportTaskRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.description
            .serialize_query(&member_key(prefix, "Description"), params);
        self.export_to_s3_task
            .serialize_query(&member_key(prefix, "ExportToS3"), params);
        self.instance_id
            .serialize_query(&member_key(prefix, "InstanceId"), params);
        self.target_environment
            .serialize_query(&member_key(prefix, "TargetEnvironment"), params);
    }
}

impl QuerySerialize for input::CreateInternetGatewayRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
    }
}

impl QuerySerialize for input::CreateKeyPairRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.key_name
            .serialize_query(&member_key(prefix, "KeyName"), params);
    }
}

impl QuerySerialize for input::CreateNetworkAclEntryRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.cidr_block
            .serialize_query(&member_key(prefix, "CidrBlock"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.egress
            .serialize_query(&member_key(prefix, "Egress"), params);
        self.icmp_type_code
            .serialize_query(&member_key(prefix, "Icmp"), params);
        self.network_acl_id
            .serialize_query(&member_key(prefix, "NetworkAclId"), params);
        self.port_range
            .serialize_query(&member_key(prefix, "PortRange"), params);
        self.protocol
            .serialize_query(&member_key(prefix, "Protocol"), params);
        self.rule_action
            .serialize_query(&member_key(prefix, "RuleAction"), params);
        self.rule_number
            .serialize_query(&member_key(prefix, "RuleNumber"), params);
    }
}

impl QuerySerialize for input::CreateNetworkAclRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.vpc_id
            .serialize_query(&member_key(prefix, "VpcId"), params);
    }
}

impl QuerySerialize for input::CreateNetworkInterfaceRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.description
            .serialize_query(&member_key(prefix, "Description"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.groups
            .serialize_query(&member_key(prefix, "SecurityGroupId"), params);
        self.private_ip_address
            .serialize_query(&member_key(prefix, "PrivateIpAddress"), params);
        self.private_ip_addresses
            .serialize_query(&member_key(prefix, "PrivateIpAddresses"), params);
        self.secondary_private_ip_address_count
            .serialize_query(&member_key(prefix, "SecondaryPrivateIpAddressCount"), params);
        self.subnet_id
            .serialize_query(&member_key(prefix, "SubnetId"), params);
    }
}

impl QuerySerialize for input::CreatePlacementGroupRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.group_name
            .serialize_query(&member_key(prefix, "GroupName"), params);
        self.strategy
            .serialize_query(&member_key(prefix, "Strategy"), params);
    }
}

impl QuerySerialize for input::CreateReservedInstancesListingRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.client_token
            .serialize_query(&member_key(prefix, "ClientToken"), params);
        self.instance_count
            .serialize_query(&member_key(prefix, "InstanceCount"), params);
        self.price_schedules
            .serialize_query(&member_key(prefix, "PriceSchedules"), params);
        self.reserved_instances_id
            .serialize_query(&member_key(prefix, "ReservedInstancesId"), params);
    }
}

impl QuerySerialize for input::CreateRouteRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.destination_cidr_block
            .serialize_query(&member_key(prefix, "DestinationCidrBlock"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.gateway_id
            .serialize_query(&member_key(prefix, "GatewayId"), params);
        self.instance_id
            .serialize_query(&member_key(prefix, "InstanceId"), params);
        self.network_interface_id
            .serialize_query(&member_key(prefix, "NetworkInterfaceId"), params);
        self.route_table_id
            .serialize_query(&member_key(prefix, "RouteTableId"), params);
        self.vpc_peering_connection_id
            .serialize_query(&member_key(prefix, "VpcPeeringConnectionId"), params);
    }
}

impl QuerySerialize for input::CreateRouteTableRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.vpc_id
            .serialize_query(&member_key(prefix, "VpcId"), params);
    }
}

impl QuerySerialize for input::CreateSecurityGroupRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.description
            .serialize_query(&member_key(prefix, "GroupDescription"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.group_name
            .serialize_query(&member_key(prefix, "GroupName"), params);
        self.vpc_id
            .serialize_query(&member_key(prefix, "VpcId"), params);
    }
}

impl QuerySerialize for input::CreateSnapshotRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.description
            .serialize_query(&member_key(prefix, "Description"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.volume_id
            .serialize_query(&member_key(prefix, "VolumeId"), params);
    }
}

impl QuerySerialize for input::CreateSpotDatafeedSubscriptionRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.bucket
            .serialize_query(&member_key(prefix, "Bucket"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.prefix
            .serialize_query(&member_key(prefix, "Prefix"), params);
    }
}

impl QuerySerialize for input::CreateSubnetRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.availability_zone
            .serialize_query(&member_key(prefix, "AvailabilityZone"), params);
        self.cidr_block
            .serialize_query(&member_key(prefix, "CidrBlock"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.vpc_id
            .serialize_query(&member_key(prefix, "VpcId"), params);
    }
}

impl QuerySerialize for input::CreateTagsRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.resources
            .serialize_query(&member_key(prefix, "ResourceId"), params);
        self.tags
            .serialize_query(&member_key(prefix, "Tag"), params);
    }
}

impl QuerySerialize for types::CreateVolumePermission {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.group
            .serialize_query(&member_key(prefix, "Group"), params);
        self.user_id
            .serialize_query(&member_key(prefix, "UserId"), params);
    }
}

impl QuerySerialize for types::CreateVolumePermissionModifications {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.add
            .serialize_query(&member_key(prefix, "Add"), params);
        self.remove
            .serialize_query(&member_key(prefix, "Remove"), params);
    }
}

impl QuerySerialize for input::CreateVolumeRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.availability_zone
            .serialize_query(&member_key(prefix, "AvailabilityZone"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.encrypted
            .serialize_query(&member_key(prefix, "Encrypted"), params);
        self.iops
            .serialize_query(&member_key(prefix, "Iops"), params);
        self.kms_key_id
            .serialize_query(&member_key(prefix, "KmsKeyId"), params);
        self.size
            .serialize_query(&member_key(prefix, "Size"), params);
        self.snapshot_id
            .serialize_query(&member_key(prefix, "SnapshotId"), params);
        self.volume_type
            .serialize_query(&member_key(prefix, "VolumeType"), params);
    }
}

impl QuerySerialize for input::CreateVpcPeeringConnectionRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.peer_owner_id
            .serialize_query(&member_key(prefix, "PeerOwnerId"), params);
        self.peer_vpc_id
            .serialize_query(&member_key(prefix, "PeerVpcId"), params);
        self.vpc_id
            .serialize_query(&member_key(prefix, "VpcId"), params);
    }
}

impl QuerySerialize for input::CreateVpcRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.cidr_block
            .serialize_query(&member_key(prefix, "CidrBlock"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.instance_tenancy
            .serialize_query(&member_key(prefix, "InstanceTenancy"), params);
    }
}

impl QuerySerialize for input::CreateVpnConnectionRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.customer_gateway_id
            .serialize_query(&member_key(prefix, "CustomerGatewayId"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.options
            .serialize_query(&member_key(prefix, "Options"), params);
        self.r#type
            .serialize_query(&member_key(prefix, "Type"), params);
        self.vpn_gateway_id
            .serialize_query(&member_key(prefix, "VpnGatewayId"), params);
    }
}

impl QuerySerialize for input::CreateVpnConnectionRouteRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.destination_cidr_block
            .serialize_query(&member_key(prefix, "DestinationCidrBlock"), params);
        self.vpn_connection_id
            .serialize_query(&member_key(prefix, "VpnConnectionId"), params);
    }
}

impl QuerySerialize for input::CreateVpnGatewayRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.availability_zone
            .serialize_query(&member_key(prefix, "AvailabilityZone"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.r#type
            .serialize_query(&member_key(prefix, "Type"), params);
    }
}

impl QuerySerialize for input::DeleteCustomerGatewayRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.customer_gateway_id
            .serialize_query(&member_key(prefix, "CustomerGatewayId"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
    }
}

impl QuerySerialize for input::DeleteDhcpOptionsRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dhcp_options_id
            .serialize_query(&member_key(prefix, "DhcpOptionsId"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
    }
}

impl QuerySerialize for input::DeleteInternetGatewayRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.internet_gateway_id
            .serialize_query(&member_key(prefix, "InternetGatewayId"), params);
    }
}

impl QuerySerialize for input::DeleteKeyPairRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.key_name
            .serialize_query(&member_key(prefix, "KeyName"), params);
    }
}

impl QuerySerialize for input::DeleteNetworkAclEntryRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.egress
            .serialize_query(&member_key(prefix, "Egress"), params);
        self.network_acl_id
            .serialize_query(&member_key(prefix, "NetworkAclId"), params);
        self.rule_number
            .serialize_query(&member_key(prefix, "RuleNumber"), params);
    }
}

impl QuerySerialize for input::DeleteNetworkAclRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.network_acl_id
            .serialize_query(&member_key(prefix, "NetworkAclId"), params);
    }
}

impl QuerySerialize for input::DeleteNetworkInterfaceRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.network_interface_id
            .serialize_query(&member_key(prefix, "NetworkInterfaceId"), params);
    }
}

impl QuerySerialize for input::DeletePlacementGroupRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.group_name
            .serialize_query(&member_key(prefix, "GroupName"), params);
    }
}

impl QuerySerialize for input::DeleteRouteRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.destination_cidr_block
            .serialize_query(&member_key(prefix, "DestinationCidrBlock"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.route_table_id
            .serialize_query(&member_key(prefix, "RouteTableId"), params);
    }
}

impl QuerySerialize for input::DeleteRouteTableRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.route_table_id
            .serialize_query(&member_key(prefix, "RouteTableId"), params);
    }
}

impl QuerySerialize for input::DeleteSecurityGroupRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.group_id
            .serialize_query(&member_key(prefix, "GroupId"), params);
        self.group_name
            .serialize_query(&member_key(prefix, "GroupName"), params);
    }
}

impl QuerySerialize for input::DeleteSnapshotRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.snapshot_id
            .serialize_query(&member_key(prefix, "SnapshotId"), params);
    }
}

impl QuerySerialize for input::DeleteSpotDatafeedSubscriptionRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
    }
}

impl QuerySerialize for input::DeleteSubnetRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.subnet_id
            .serialize_query(&member_key(prefix, "SubnetId"), params);
    }
}

impl QuerySerialize for input::DeleteTagsRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.resources
            .serialize_query(&member_key(prefix, "ResourceId"), params);
        self.tags
            .serialize_query(&member_key(prefix, "Tag"), params);
    }
}

impl QuerySerialize for input::DeleteVolumeRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.volume_id
            .serialize_query(&member_key(prefix, "VolumeId"), params);
    }
}

impl QuerySerialize for input::DeleteVpcPeeringConnectionRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.vpc_peering_connection_id
            .serialize_query(&member_key(prefix, "VpcPeeringConnectionId"), params);
    }
}

impl QuerySerialize for input::DeleteVpcRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.vpc_id
            .serialize_query(&member_key(prefix, "VpcId"), params);
    }
}

impl QuerySerialize for input::DeleteVpnConnectionRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.vpn_connection_id
            .serialize_query(&member_key(prefix, "VpnConnectionId"), params);
    }
}

impl QuerySerialize for input::DeleteVpnConnectionRouteRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.destination_cidr_block
            .serialize_query(&member_key(prefix, "DestinationCidrBlock"), params);
        self.vpn_connection_id
            .serialize_query(&member_key(prefix, "VpnConnectionId"), params);
    }
}

impl QuerySerialize for input::DeleteVpnGatewayRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.vpn_gateway_id
            .serialize_query(&member_key(prefix, "VpnGatewayId"), params);
    }
}

impl QuerySerialize for input::DeregisterImageRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.image_id
            .serialize_query(&member_key(prefix, "ImageId"), params);
    }
}

impl QuerySerialize for input::DescribeAccountAttributesRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.attribute_names
            .serialize_query(&member_key(prefix, "AttributeName"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
    }
}

impl QuerySerialize for input::DescribeAddressesRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.allocation_ids
            .serialize_query(&member_key(prefix, "AllocationId"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.filters
            .serialize_query(&member_key(prefix, "Filter"), params);
        self.public_ips
            .serialize_query(&member_key(prefix, "PublicIp"), params);
    }
}

impl QuerySerialize for input::DescribeAvailabilityZonesRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.filters
            .serialize_query(&member_key(prefix, "Filter"), params);
        self.zone_names
            .serialize_query(&member_key(prefix, "ZoneName"), params);
    }
}

impl QuerySerialize for input::DescribeBundleTasksRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.bundle_ids
            .serialize_query(&member_key(prefix, "BundleId"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.filters
            .serialize_query(&member_key(prefix, "Filter"), params);
    }
}

impl QuerySerialize for input::DescribeConversionTasksRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.conversion_task_ids
            .serialize_query(&member_key(prefix, "ConversionTaskId"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.filters
            .serialize_query(&member_key(prefix, "Filter"), params);
    }
}

impl QuerySerialize for input::DescribeCustomerGatewaysRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.customer_gateway_ids
            .serialize_query(&member_key(prefix, "CustomerGatewayId"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.filters
            .serialize_query(&member_key(prefix, "Filter"), params);
    }
}

impl QuerySerialize for input::DescribeDhcpOptionsRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dhcp_options_ids
            .serialize_query(&member_key(prefix, "DhcpOptionsId"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.filters
            .serialize_query(&member_key(prefix, "Filter"), params);
    }
}

impl QuerySerialize for input::DescribeExportTasksRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.export_task_ids
            .serialize_query(&member_key(prefix, "ExportTaskId"), params);
    }
}

impl QuerySerialize for input::DescribeImageAttributeRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.attribute
            .serialize_query(&member_key(prefix, "Attribute"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.image_id
            .serialize_query(&member_key(prefix, "ImageId"), params);
    }
}

impl QuerySerialize for input::DescribeImagesRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.executable_users
            .serialize_query(&member_key(prefix, "ExecutableBy"), params);
        self.filters
            .serialize_query(&member_key(prefix, "Filter"), params);
        self.image_ids
            .serialize_query(&member_key(prefix, "ImageId"), params);
        self.owners
            .serialize_query(&member_key(prefix, "Owner"), params);
    }
}

impl QuerySerialize for input::DescribeInstanceAttributeRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.attribute
            .serialize_query(&member_key(prefix, "Attribute"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.instance_id
            .serialize_query(&member_key(prefix, "InstanceId"), params);
    }
}

impl QuerySerialize for input::DescribeInstanceStatusRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.filters
            .serialize_query(&member_key(prefix, "Filter"), params);
        self.include_all_instances
            .serialize_query(&member_key(prefix, "IncludeAllInstances"), params);
        self.instance_ids
            .serialize_query(&member_key(prefix, "InstanceId"), params);
        self.max_results
            .serialize_query(&member_key(prefix, "MaxResults"), params);
        self.next_token
            .serialize_query(&member_key(prefix, "NextToken"), params);
    }
}

impl QuerySerialize for input::DescribeInstancesRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.filters
            .serialize_query(&member_key(prefix, "Filter"), params);
        self.instance_ids
            .serialize_query(&member_key(prefix, "InstanceId"), params);
        self.max_results
            .serialize_query(&member_key(prefix, "MaxResults"), params);
        self.next_token
            .serialize_query(&member_key(prefix, "NextToken"), params);
    }
}

impl QuerySerialize for input::DescribeInternetGatewaysRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.filters
            .serialize_query(&member_key(prefix, "Filter"), params);
        self.internet_gateway_ids
            .serialize_query(&member_key(prefix, "InternetGatewayId"), params);
    }
}

impl QuerySerialize for input::DescribeKeyPairsRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.filters
            .serialize_query(&member_key(prefix, "Filter"), params);
        self.key_names
            .serialize_query(&member_key(prefix, "KeyName"), params);
    }
}

impl QuerySerialize for input::DescribeNetworkAclsRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.filters
            .serialize_query(&member_key(prefix, "Filter"), params);
        self.network_acl_ids
            .serialize_query(&member_key(prefix, "NetworkAclId"), params);
    }
}

impl QuerySerialize for input::DescribeNetworkInterfaceAttributeRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.attribute
            .serialize_query(&member_key(prefix, "Attribute"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.network_interface_id
            .serialize_query(&member_key(prefix, "NetworkInterfaceId"), params);
    }
}

impl QuerySerialize for input::DescribeNetworkInterfacesRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.filters
            .serialize_query(&member_key(prefix, "Filter"), params);
        self.network_interface_ids
            .serialize_query(&member_key(prefix, "NetworkInterfaceId"), params);
    }
}

impl QuerySerialize for input::DescribePlacementGroupsRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.filters
            .serialize_query(&member_key(prefix, "Filter"), params);
        self.group_names
            .serialize_query(&member_key(prefix, "GroupName"), params);
    }
}

impl QuerySerialize for input::DescribeRegionsRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.filters
            .serialize_query(&member_key(prefix, "Filter"), params);
        self.region_names
            .serialize_query(&member_key(prefix, "RegionName"), params);
    }
}

impl QuerySerialize for input::DescribeReservedInstancesListingsRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.filters
            .serialize_query(&member_key(prefix, "Filters"), params);
        self.reserved_instances_id
            .serialize_query(&member_key(prefix, "ReservedInstancesId"), params);
        self.reserved_instances_listing_id
            .serialize_query(&member_key(prefix, "ReservedInstancesListingId"), params);
    }
}

impl QuerySerialize for input::DescribeReservedInstancesModificationsRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.filters
            .serialize_query(&member_key(prefix, "Filter"), params);
        self.next_token
            .serialize_query(&member_key(prefix, "NextToken"), params);
        self.reserved_instances_modification_ids
            .serialize_query(&member_key(prefix, "ReservedInstancesModificationId"), params);
    }
}

impl QuerySerialize for input::DescribeReservedInstancesOfferingsRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.availability_zone
            .serialize_query(&member_key(prefix, "AvailabilityZone"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.filters
            .serialize_query(&member_key(prefix, "Filter"), params);
        self.include_marketplace
            .serialize_query(&member_key(prefix, "IncludeMarketplace"), params);
        self.instance_tenancy
            .serialize_query(&member_key(prefix, "InstanceTenancy"), params);
        self.instance_type
            .serialize_query(&member_key(prefix, "InstanceType"), params);
        self.max_duration
            .serialize_query(&member_key(prefix, "MaxDuration"), params);
        self.max_instance_count
            .serialize_query(&member_key(prefix, "MaxInstanceCount"), params);
        self.max_results
            .serialize_query(&member_key(prefix, "MaxResults"), params);
        self.min_duration
            .serialize_query(&member_key(prefix, "MinDuration"), params);
        self.next_token
            .serialize_query(&member_key(prefix, "NextToken"), params);
        self.offering_type
            .serialize_query(&member_key(prefix, "OfferingType"), params);
        self.product_description
            .serialize_query(&member_key(prefix, "ProductDescription"), params);
        self.reserved_instances_offering_ids
            .serialize_query(&member_key(prefix, "ReservedInstancesOfferingId"), params);
    }
}

impl QuerySerialize for input::DescribeReservedInstancesRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.filters
            .serialize_query(&member_key(prefix, "Filter"), params);
        self.offering_type
            .serialize_query(&member_key(prefix, "OfferingType"), params);
        self.reserved_instances_ids
            .serialize_query(&member_key(prefix, "ReservedInstancesId"), params);
    }
}

impl QuerySerialize for input::DescribeRouteTablesRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.filters
            .serialize_query(&member_key(prefix, "Filter"), params);
        self.route_table_ids
            .serialize_query(&member_key(prefix, "RouteTableId"), params);
    }
}

impl QuerySerialize for input::DescribeSecurityGroupsRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.filters
            .serialize_query(&member_key(prefix, "Filter"), params);
        self.group_ids
            .serialize_query(&member_key(prefix, "GroupId"), params);
        self.group_names
            .serialize_query(&member_key(prefix, "GroupName"), params);
    }
}

impl QuerySerialize for input::DescribeSnapshotAttributeRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.attribute
            .serialize_query(&member_key(prefix, "Attribute"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.snapshot_id
            .serialize_query(&member_key(prefix, "SnapshotId"), params);
    }
}

impl QuerySerialize for input::DescribeSnapshotsRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.filters
            .serialize_query(&member_key(prefix, "Filter"), params);
        self.owner_ids
            .serialize_query(&member_key(prefix, "Owner"), params);
        self.restorable_by_user_ids
            .serialize_query(&member_key(prefix, "RestorableBy"), params);
        self.snapshot_ids
            .serialize_query(&member_key(prefix, "SnapshotId"), params);
    }
}

impl QuerySerialize for input::DescribeSpotDatafeedSubscriptionRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
    }
}

impl QuerySerialize for input::DescribeSpotInstanceRequestsRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.filters
            .serialize_query(&member_key(prefix, "Filter"), params);
        self.spot_instance_request_ids
            .serialize_query(&member_key(prefix, "SpotInstanceRequestId"), params);
    }
}

impl QuerySerialize for input::DescribeSpotPriceHistoryRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.availability_zone
            .serialize_query(&member_key(prefix, "AvailabilityZone"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.end_time
            .serialize_query(&member_key(prefix, "EndTime"), params);
        self.filters
            .serialize_query(&member_key(prefix, "Filter"), params);
        self.instance_types
            .serialize_query(&member_key(prefix, "InstanceType"), params);
        self.max_results
            .serialize_query(&member_key(prefix, "MaxResults"), params);
        self.next_token
            .serialize_query(&member_key(prefix, "NextToken"), params);
        self.product_descriptions
            .serialize_query(&member_key(prefix, "ProductDescription"), params);
        self.start_time
            .serialize_query(&member_key(prefix, "StartTime"), params);
    }
}

impl QuerySerialize for input::DescribeSubnetsRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.filters
            .serialize_query(&member_key(prefix, "Filter"), params);
        self.subnet_ids
            .serialize_query(&member_key(prefix, "SubnetId"), params);
    }
}

impl QuerySerialize for input::DescribeTagsRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.filters
            .serialize_query(&member_key(prefix, "Filter"), params);
        self.max_results
            .serialize_query(&member_key(prefix, "MaxResults"), params);
        self.next_token
            .serialize_query(&member_key(prefix, "NextToken"), params);
    }
}

impl QuerySerialize for input::DescribeVolumeAttributeRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.attribute
            .serialize_query(&member_key(prefix, "Attribute"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.volume_id
            .serialize_query(&member_key(prefix, "VolumeId"), params);
    }
}

impl QuerySerialize for input::DescribeVolumeStatusRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.filters
            .serialize_query(&member_key(prefix, "Filter"), params);
        self.max_results
            .serialize_query(&member_key(prefix, "MaxResults"), params);
        self.next_token
            .serialize_query(&member_key(prefix, "NextToken"), params);
        self.volume_ids
            .serialize_query(&member_key(prefix, "VolumeId"), params);
    }
}

impl QuerySerialize for input::DescribeVolumesRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.filters
            .serialize_query(&member_key(prefix, "Filter"), params);
        self.max_results
            .serialize_query(&member_key(prefix, "MaxResults"), params);
        self.next_token
            .serialize_query(&member_key(prefix, "NextToken"), params);
        self.volume_ids
            .serialize_query(&member_key(prefix, "VolumeId"), params);
    }
}

impl QuerySerialize for input::DescribeVpcAttributeRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.attribute
            .serialize_query(&member_key(prefix, "Attribute"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.vpc_id
            .serialize_query(&member_key(prefix, "VpcId"), params);
    }
}

impl QuerySerialize for input::DescribeVpcPeeringConnectionsRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.filters
            .serialize_query(&member_key(prefix, "Filter"), params);
        self.vpc_peering_connection_ids
            .serialize_query(&member_key(prefix, "VpcPeeringConnectionId"), params);
    }
}

impl QuerySerialize for input::DescribeVpcsRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.filters
            .serialize_query(&member_key(prefix, "Filter"), params);
        self.vpc_ids
            .serialize_query(&member_key(prefix, "VpcId"), params);
    }
}

impl QuerySerialize for input::DescribeVpnConnectionsRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.filters
            .serialize_query(&member_key(prefix, "Filter"), params);
        self.vpn_connection_ids
            .serialize_query(&member_key(prefix, "VpnConnectionId"), params);
    }
}

impl QuerySerialize for input::DescribeVpnGatewaysRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.filters
            .serialize_query(&member_key(prefix, "Filter"), params);
        self.vpn_gateway_ids
            .serialize_query(&member_key(prefix, "VpnGatewayId"), params);
    }
}

impl QuerySerialize for input::DetachInternetGatewayRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.internet_gateway_id
            .serialize_query(&member_key(prefix, "InternetGatewayId"), params);
        self.vpc_id
            .serialize_query(&member_key(prefix, "VpcId"), params);
    }
}

impl QuerySerialize for input::DetachNetworkInterfaceRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.attachment_id
            .serialize_query(&member_key(prefix, "AttachmentId"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.force
            .serialize_query(&member_key(prefix, "Force"), params);
    }
}

impl QuerySerialize for input::DetachVolumeRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.device
            .serialize_query(&member_key(prefix, "Device"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.force
            .serialize_query(&member_key(prefix, "Force"), params);
        self.instance_id
            .serialize_query(&member_key(prefix, "InstanceId"), params);
        self.volume_id
            .serialize_query(&member_key(prefix, "VolumeId"), params);
    }
}

impl QuerySerialize for input::DetachVpnGatewayRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.vpc_id
            .serialize_query(&member_key(prefix, "VpcId"), params);
        self.vpn_gateway_id
            .serialize_query(&member_key(prefix, "VpnGatewayId"), params);
    }
}

impl QuerySerialize for input::DisableVgwRoutePropagationRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.gateway_id
            .serialize_query(&member_key(prefix, "GatewayId"), params);
        self.route_table_id
            .serialize_query(&member_key(prefix, "RouteTableId"), params);
    }
}

impl QuerySerialize for input::DisassociateAddressRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.association_id
            .serialize_query(&member_key(prefix, "AssociationId"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.public_ip
            .serialize_query(&member_key(prefix, "PublicIp"), params);
    }
}

impl QuerySerialize for input::DisassociateRouteTableRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.association_id
            .serialize_query(&member_key(prefix, "AssociationId"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
    }
}

impl QuerySerialize for types::DiskImage {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.description
            .serialize_query(&member_key(prefix, "Description"), params);
        self.image
            .serialize_query(&member_key(prefix, "Image"), params);
        self.volume
            .serialize_query(&member_key(prefix, "Volume"), params);
    }
}

impl QuerySerialize for types::DiskImageDetail {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.bytes
            .serialize_query(&member_key(prefix, "Bytes"), params);
        self.format
            .serialize_query(&member_key(prefix, "Format"), params);
        self.import_manifest_url
            .serialize_query(&member_key(prefix, "ImportManifestUrl"), params);
    }
}

impl QuerySerialize for types::EbsBlockDevice {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.delete_on_termination
            .serialize_query(&member_key(prefix, "DeleteOnTermination"), params);
        self.encrypted
            .serialize_query(&member_key(prefix, "Encrypted"), params);
        self.iops
            .serialize_query(&member_key(prefix, "Iops"), params);
        self.snapshot_id
            .serialize_query(&member_key(prefix, "SnapshotId"), params);
        self.volume_size
            .serialize_query(&member_key(prefix, "VolumeSize"), params);
        self.volume_type
            .serialize_query(&member_key(prefix, "VolumeType"), params);
    }
}

impl QuerySerialize for types::EbsInstanceBlockDeviceSpecification {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.delete_on_termination
            .serialize_query(&member_key(prefix, "DeleteOnTermination"), params);
        self.volume_id
            .serialize_query(&member_key(prefix, "VolumeId"), params);
    }
}

impl QuerySerialize for input::EnableVgwRoutePropagationRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.gateway_id
            .serialize_query(&member_key(prefix, "GatewayId"), params);
        self.route_table_id
            .serialize_query(&member_key(prefix, "RouteTableId"), params);
    }
}

impl QuerySerialize for input::EnableVolumeIoRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.volume_id
            .serialize_query(&member_key(prefix, "VolumeId"), params);
    }
}

impl QuerySerialize for types::ExportToS3TaskSpecification {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.container_format
            .serialize_query(&member_key(prefix, "ContainerFormat"), params);
        self.disk_image_format
            .serialize_query(&member_key(prefix, "DiskImageFormat"), params);
        self.s3_bucket
            .serialize_query(&member_key(prefix, "S3Bucket"), params);
        self.s3_prefix
            .serialize_query(&member_key(prefix, "S3Prefix"), params);
    }
}

impl QuerySerialize for types::Filter {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.name
            .serialize_query(&member_key(prefix, "Name"), params);
        self.values
            .serialize_query(&member_key(prefix, "Value"), params);
    }
}

impl QuerySerialize for input::GetConsoleOutputRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.instance_id
            .serialize_query(&member_key(prefix, "InstanceId"), params);
    }
}

impl QuerySerialize for input::GetPasswordDataRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.instance_id
            .serialize_query(&member_key(prefix, "InstanceId"), params);
    }
}

impl QuerySerialize for types::IamInstanceProfileSpecification {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.arn
            .serialize_query(&member_key(prefix, "Arn"), params);
        self.name
            .serialize_query(&member_key(prefix, "Name"), params);
    }
}

impl QuerySerialize for types::IcmpTypeCode {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.code
            .serialize_query(&member_key(prefix, "Code"), params);
        self.r#type
            .serialize_query(&member_key(prefix, "Type"), params);
    }
}

impl QuerySerialize for types::ImportInstanceLaunchSpecification {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.additional_info
            .serialize_query(&member_key(prefix, "AdditionalInfo"), params);
        self.architecture
            .serialize_query(&member_key(prefix, "Architecture"), params);
        self.group_ids
            .serialize_query(&member_key(prefix, "GroupId"), params);
        self.group_names
            .serialize_query(&member_key(prefix, "GroupName"), params);
        self.instance_initiated_shutdown_behavior
            .serialize_query(&member_key(prefix, "InstanceInitiatedShutdownBehavior"), params);
        self.instance_type
            .serialize_query(&member_key(prefix, "InstanceType"), params);
        self.monitoring
            .serialize_query(&member_key(prefix, "Monitoring"), params);
        self.placement
            .serialize_query(&member_key(prefix, "Placement"), params);
        self.private_ip_address
            .serialize_query(&member_key(prefix, "PrivateIpAddress"), params);
        self.subnet_id
            .serialize_query(&member_key(prefix, "SubnetId"), params);
        self.user_data
            .serialize_query(&member_key(prefix, "UserData"), params);
    }
}

impl QuerySerialize for input::ImportInstanceRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.description
            .serialize_query(&member_key(prefix, "Description"), params);
        self.disk_images
            .serialize_query(&member_key(prefix, "DiskImage"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.launch_specification
            .serialize_query(&member_key(prefix, "LaunchSpecification"), params);
        self.platform
            .serialize_query(&member_key(prefix, "Platform"), params);
    }
}

impl QuerySerialize for input::ImportKeyPairRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.key_name
            .serialize_query(&member_key(prefix, "KeyName"), params);
        self.public_key_material
            .serialize_query(&member_key(prefix, "PublicKeyMaterial"), params);
    }
}

impl QuerySerialize for input::ImportVolumeRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.availability_zone
            .serialize_query(&member_key(prefix, "AvailabilityZone"), params);
        self.description
            .serialize_query(&member_key(prefix, "Description"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.image
            .serialize_query(&member_key(prefix, "Image"), params);
        self.volume
            .serialize_query(&member_key(prefix, "Volume"), params);
    }
}

impl QuerySerialize for types::InstanceBlockDeviceMappingSpecification {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.device_name
            .serialize_query(&member_key(prefix, "DeviceName"), params);
        self.ebs
            .serialize_query(&member_key(prefix, "Ebs"), params);
        self.no_device
            .serialize_query(&member_key(prefix, "NoDevice"), params);
        self.virtual_name
            .serialize_query(&member_key(prefix, "VirtualName"), params);
    }
}

impl QuerySerialize for types::InstanceNetworkInterfaceSpecification {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.associate_public_ip_address
            .serialize_query(&member_key(prefix, "AssociatePublicIpAddress"), params);
        self.delete_on_termination
            .serialize_query(&member_key(prefix, "DeleteOnTermination"), params);
        self.description
            .serialize_query(&member_key(prefix, "Description"), params);
        self.device_index
            .serialize_query(&member_key(prefix, "DeviceIndex"), params);
        self.groups
            .serialize_query(&member_key(prefix, "SecurityGroupId"), params);
        self.network_interface_id
            .serialize_query(&member_key(prefix, "NetworkInterfaceId"), params);
        self.private_ip_address
            .serialize_query(&member_key(prefix, "PrivateIpAddress"), params);
        self.private_ip_addresses
            .serialize_query(&member_key(prefix, "PrivateIpAddressesSet"), params);
        self.secondary_private_ip_address_count
            .serialize_query(&member_key(prefix, "SecondaryPrivateIpAddressCount"), params);
        self.subnet_id
            .serialize_query(&member_key(prefix, "SubnetId"), params);
    }
}

impl QuerySerialize for types::IpPermission {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.from_port
            .serialize_query(&member_key(prefix, "FromPort"), params);
        self.ip_protocol
            .serialize_query(&member_key(prefix, "IpProtocol"), params);
        self.ip_ranges
            .serialize_query(&member_key(prefix, "IpRanges"), params);
        self.to_port
            .serialize_query(&member_key(prefix, "ToPort"), params);
        self.user_id_group_pairs
            .serialize_query(&member_key(prefix, "Groups"), params);
    }
}

impl QuerySerialize for types::IpRange {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.cidr_ip
            .serialize_query(&member_key(prefix, "CidrIp"), params);
    }
}

impl QuerySerialize for types::LaunchPermission {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.group
            .serialize_query(&member_key(prefix, "Group"), params);
        self.user_id
            .serialize_query(&member_key(prefix, "UserId"), params);
    }
}

impl QuerySerialize for types::LaunchPermissionModifications {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.add
            .serialize_query(&member_key(prefix, "Add"), params);
        self.remove
            .serialize_query(&member_key(prefix, "Remove"), params);
    }
}

impl QuerySerialize for input::ModifyImageAttributeRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.attribute
            .serialize_query(&member_key(prefix, "Attribute"), params);
        self.description
            .serialize_query(&member_key(prefix, "Description"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.image_id
            .serialize_query(&member_key(prefix, "ImageId"), params);
        self.launch_permission
            .serialize_query(&member_key(prefix, "LaunchPermission"), params);
        self.operation_type
            .serialize_query(&member_key(prefix, "OperationType"), params);
        self.product_codes
            .serialize_query(&member_key(prefix, "ProductCode"), params);
        self.user_groups
            .serialize_query(&member_key(prefix, "UserGroup"), params);
        self.user_ids
            .serialize_query(&member_key(prefix, "UserId"), params);
        self.value
            .serialize_query(&member_key(prefix, "Value"), params);
    }
}

impl QuerySerialize for input::ModifyInstanceAttributeRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.attribute
            .serialize_query(&member_key(prefix, "Attribute"), params);
        self.block_device_mappings
            .serialize_query(&member_key(prefix, "BlockDeviceMapping"), params);
        self.disable_api_termination
            .serialize_query(&member_key(prefix, "DisableApiTermination"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.ebs_optimized
            .serialize_query(&member_key(prefix, "EbsOptimized"), params);
        self.groups
            .serialize_query(&member_key(prefix, "GroupId"), params);
        self.instance_id
            .serialize_query(&member_key(prefix, "InstanceId"), params);
        self.instance_initiated_shutdown_behavior
            .serialize_query(&member_key(prefix, "InstanceInitiatedShutdownBehavior"), params);
        self.instance_type
            .serialize_query(&member_key(prefix, "InstanceType"), params);
        self.kernel
            .serialize_query(&member_key(prefix, "Kernel"), params);
        self.ramdisk
            .serialize_query(&member_key(prefix, "Ramdisk"), params);
        self.source_dest_check
            .serialize_query(&member_key(prefix, "SourceDestCheck"), params);
        self.sriov_net_support
            .serialize_query(&member_key(prefix, "SriovNetSupport"), params);
        self.user_data
            .serialize_query(&member_key(prefix, "UserData"), params);
        self.value
            .serialize_query(&member_key(prefix, "Value"), params);
    }
}

impl QuerySerialize for input::ModifyNetworkInterfaceAttributeRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.attachment
            .serialize_query(&member_key(prefix, "Attachment"), params);
        self.description
            .serialize_query(&member_key(prefix, "Description"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.groups
            .serialize_query(&member_key(prefix, "SecurityGroupId"), params);
        self.network_interface_id
            .serialize_query(&member_key(prefix, "NetworkInterfaceId"), params);
        self.source_dest_check
            .serialize_query(&member_key(prefix, "SourceDestCheck"), params);
    }
}

impl QuerySerialize for input::ModifyReservedInstancesRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.client_token
            .serialize_query(&member_key(prefix, "ClientToken"), params);
        self.reserved_instances_ids
            .serialize_query(&member_key(prefix, "ReservedInstancesId"), params);
        self.target_configurations
            .serialize_query(&member_key(prefix, "ReservedInstancesConfigurationSetItemType"), params);
    }
}

impl QuerySerialize for input::ModifySnapshotAttributeRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.attribute
            .serialize_query(&member_key(prefix, "Attribute"), params);
        self.create_volume_permission
            .serialize_query(&member_key(prefix, "CreateVolumePermission"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.group_names
            .serialize_query(&member_key(prefix, "UserGroup"), params);
        self.operation_type
            .serialize_query(&member_key(prefix, "OperationType"), params);
        self.snapshot_id
            .serialize_query(&member_key(prefix, "SnapshotId"), params);
        self.user_ids
            .serialize_query(&member_key(prefix, "UserId"), params);
    }
}

impl QuerySerialize for input::ModifySubnetAttributeRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.map_public_ip_on_launch
            .serialize_query(&member_key(prefix, "MapPublicIpOnLaunch"), params);
        self.subnet_id
            .serialize_query(&member_key(prefix, "SubnetId"), params);
    }
}

impl QuerySerialize for input::ModifyVolumeAttributeRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.auto_enable_io
            .serialize_query(&member_key(prefix, "AutoEnableIO"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.volume_id
            .serialize_query(&member_key(prefix, "VolumeId"), params);
    }
}

impl QuerySerialize for input::ModifyVpcAttributeRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.enable_dns_hostnames
            .serialize_query(&member_key(prefix, "EnableDnsHostnames"), params);
        self.enable_dns_support
            .serialize_query(&member_key(prefix, "EnableDnsSupport"), params);
        self.vpc_id
            .serialize_query(&member_key(prefix, "VpcId"), params);
    }
}

impl QuerySerialize for input::MonitorInstancesRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.instance_ids
            .serialize_query(&member_key(prefix, "InstanceId"), params);
    }
}

impl QuerySerialize for types::NetworkInterfaceAttachmentChanges {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.attachment_id
            .serialize_query(&member_key(prefix, "AttachmentId"), params);
        self.delete_on_termination
            .serialize_query(&member_key(prefix, "DeleteOnTermination"), params);
    }
}

impl QuerySerialize for types::NewDhcpConfiguration {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.key
            .serialize_query(&member_key(prefix, "Key"), params);
        self.values
            .serialize_query(&member_key(prefix, "Value"), params);
    }
}

impl QuerySerialize for types::Placement {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.availability_zone
            .serialize_query(&member_key(prefix, "AvailabilityZone"), params);
        self.group_name
            .serialize_query(&member_key(prefix, "GroupName"), params);
        self.tenancy
            .serialize_query(&member_key(prefix, "Tenancy"), params);
    }
}

impl QuerySerialize for types::PortRange {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.from
            .serialize_query(&member_key(prefix, "From"), params);
        self.to
            .serialize_query(&member_key(prefix, "To"), params);
    }
}

impl QuerySerialize for types::PriceScheduleSpecification {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.currency_code
            .serialize_query(&member_key(prefix, "CurrencyCode"), params);
        self.price
            .serialize_query(&member_key(prefix, "Price"), params);
        self.term
            .serialize_query(&member_key(prefix, "Term"), params);
    }
}

impl QuerySerialize for types::PrivateIpAddressSpecification {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.primary
            .serialize_query(&member_key(prefix, "Primary"), params);
        self.private_ip_address
            .serialize_query(&member_key(prefix, "PrivateIpAddress"), params);
    }
}

impl QuerySerialize for input::PurchaseReservedInstancesOfferingRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.instance_count
            .serialize_query(&member_key(prefix, "InstanceCount"), params);
        self.limit_price
            .serialize_query(&member_key(prefix, "LimitPrice"), params);
        self.reserved_instances_offering_id
            .serialize_query(&member_key(prefix, "ReservedInstancesOfferingId"), params);
    }
}

impl QuerySerialize for input::RebootInstancesRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.instance_ids
            .serialize_query(&member_key(prefix, "InstanceId"), params);
    }
}

impl QuerySerialize for input::RegisterImageRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.architecture
            .serialize_query(&member_key(prefix, "Architecture"), params);
        self.block_device_mappings
            .serialize_query(&member_key(prefix, "BlockDeviceMapping"), params);
        self.description
            .serialize_query(&member_key(prefix, "Description"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.image_location
            .serialize_query(&member_key(prefix, "ImageLocation"), params);
        self.kernel_id
            .serialize_query(&member_key(prefix, "KernelId"), params);
        self.name
            .serialize_query(&member_key(prefix, "Name"), params);
        self.ramdisk_id
            .serialize_query(&member_key(prefix, "RamdiskId"), params);
        self.root_device_name
            .serialize_query(&member_key(prefix, "RootDeviceName"), params);
        self.sriov_net_support
            .serialize_query(&member_key(prefix, "SriovNetSupport"), params);
        self.virtualization_type
            .serialize_query(&member_key(prefix, "VirtualizationType"), params);
    }
}

impl QuerySerialize for input::RejectVpcPeeringConnectionRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.vpc_peering_connection_id
            .serialize_query(&member_key(prefix, "VpcPeeringConnectionId"), params);
    }
}

impl QuerySerialize for input::ReleaseAddressRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.allocation_id
            .serialize_query(&member_key(prefix, "AllocationId"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.public_ip
            .serialize_query(&member_key(prefix, "PublicIp"), params);
    }
}

impl QuerySerialize for input::ReplaceNetworkAclAssociationRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.association_id
            .serialize_query(&member_key(prefix, "AssociationId"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.network_acl_id
            .serialize_query(&member_key(prefix, "NetworkAclId"), params);
    }
}

impl QuerySerialize for input::ReplaceNetworkAclEntryRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.cidr_block
            .serialize_query(&member_key(prefix, "CidrBlock"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.egress
            .serialize_query(&member_key(prefix, "Egress"), params);
        self.icmp_type_code
            .serialize_query(&member_key(prefix, "Icmp"), params);
        self.network_acl_id
            .serialize_query(&member_key(prefix, "NetworkAclId"), params);
        self.port_range
            .serialize_query(&member_key(prefix, "PortRange"), params);
        self.protocol
            .serialize_query(&member_key(prefix, "Protocol"), params);
        self.rule_action
            .serialize_query(&member_key(prefix, "RuleAction"), params);
        self.rule_number
            .serialize_query(&member_key(prefix, "RuleNumber"), params);
    }
}

impl QuerySerialize for input::ReplaceRouteRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.destination_cidr_block
            .serialize_query(&member_key(prefix, "DestinationCidrBlock"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.gateway_id
            .serialize_query(&member_key(prefix, "GatewayId"), params);
        self.instance_id
            .serialize_query(&member_key(prefix, "InstanceId"), params);
        self.network_interface_id
            .serialize_query(&member_key(prefix, "NetworkInterfaceId"), params);
        self.route_table_id
            .serialize_query(&member_key(prefix, "RouteTableId"), params);
        self.vpc_peering_connection_id
            .serialize_query(&member_key(prefix, "VpcPeeringConnectionId"), params);
    }
}

impl QuerySerialize for input::ReplaceRouteTableAssociationRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.association_id
            .serialize_query(&member_key(prefix, "AssociationId"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.route_table_id
            .serialize_query(&member_key(prefix, "RouteTableId"), params);
    }
}

impl QuerySerialize for input::ReportInstanceStatusRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.description
            .serialize_query(&member_key(prefix, "Description"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.end_time
            .serialize_query(&member_key(prefix, "EndTime"), params);
        self.instances
            .serialize_query(&member_key(prefix, "InstanceId"), params);
        self.reason_codes
            .serialize_query(&member_key(prefix, "ReasonCode"), params);
        self.start_time
            .serialize_query(&member_key(prefix, "StartTime"), params);
        self.status
            .serialize_query(&member_key(prefix, "Status"), params);
    }
}

impl QuerySerialize for input::RequestSpotInstancesRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.availability_zone_group
            .serialize_query(&member_key(prefix, "AvailabilityZoneGroup"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.instance_count
            .serialize_query(&member_key(prefix, "InstanceCount"), params);
        self.launch_group
            .serialize_query(&member_key(prefix, "LaunchGroup"), params);
        self.launch_specification
            .serialize_query(&member_key(prefix, "LaunchSpecification"), params);
        self.spot_price
            .serialize_query(&member_key(prefix, "SpotPrice"), params);
        self.r#type
            .serialize_query(&member_key(prefix, "Type"), params);
        self.valid_from
            .serialize_query(&member_key(prefix, "ValidFrom"), params);
        self.valid_until
            .serialize_query(&member_key(prefix, "ValidUntil"), params);
    }
}

impl QuerySerialize for types::RequestSpotLaunchSpecification {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.addressing_type
            .serialize_query(&member_key(prefix, "AddressingType"), params);
        self.block_device_mappings
            .serialize_query(&member_key(prefix, "BlockDeviceMapping"), params);
        self.ebs_optimized
            .serialize_query(&member_key(prefix, "EbsOptimized"), params);
        self.iam_instance_profile
            .serialize_query(&member_key(prefix, "IamInstanceProfile"), params);
        self.image_id
            .serialize_query(&member_key(prefix, "ImageId"), params);
        self.instance_type
            .serialize_query(&member_key(prefix, "InstanceType"), params);
        self.kernel_id
            .serialize_query(&member_key(prefix, "KernelId"), params);
        self.key_name
            .serialize_query(&member_key(prefix, "KeyName"), params);
        self.monitoring
            .serialize_query(&member_key(prefix, "Monitoring"), params);
        self.network_interfaces
            .serialize_query(&member_key(prefix, "NetworkInterface"), params);
        self.placement
            .serialize_query(&member_key(prefix, "Placement"), params);
        self.ramdisk_id
            .serialize_query(&member_key(prefix, "RamdiskId"), params);
        self.security_group_ids
            .serialize_query(&member_key(prefix, "SecurityGroupId"), params);
        self.security_groups
            .serialize_query(&member_key(prefix, "SecurityGroup"), params);
        self.subnet_id
            .serialize_query(&member_key(prefix, "SubnetId"), params);
        self.user_data
            .serialize_query(&member_key(prefix, "UserData"), params);
    }
}

impl QuerySerialize for types::ReservedInstanceLimitPrice {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.amount
            .serialize_query(&member_key(prefix, "Amount"), params);
        self.currency_code
            .serialize_query(&member_key(prefix, "CurrencyCode"), params);
    }
}

impl QuerySerialize for types::ReservedInstancesConfiguration {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.availability_zone
            .serialize_query(&member_key(prefix, "AvailabilityZone"), params);
        self.instance_count
            .serialize_query(&member_key(prefix, "InstanceCount"), params);
        self.instance_type
            .serialize_query(&member_key(prefix, "InstanceType"), params);
        self.platform
            .serialize_query(&member_key(prefix, "Platform"), params);
    }
}

impl QuerySerialize for input::ResetImageAttributeRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.attribute
            .serialize_query(&member_key(prefix, "Attribute"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.image_id
            .serialize_query(&member_key(prefix, "ImageId"), params);
    }
}

impl QuerySerialize for input::ResetInstanceAttributeRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.attribute
            .serialize_query(&member_key(prefix, "Attribute"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.instance_id
            .serialize_query(&member_key(prefix, "InstanceId"), params);
    }
}

impl QuerySerialize for input::ResetNetworkInterfaceAttributeRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.network_interface_id
            .serialize_query(&member_key(prefix, "NetworkInterfaceId"), params);
        self.source_dest_check
            .serialize_query(&member_key(prefix, "SourceDestCheck"), params);
    }
}

impl QuerySerialize for input::ResetSnapshotAttributeRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.attribute
            .serialize_query(&member_key(prefix, "Attribute"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.snapshot_id
            .serialize_query(&member_key(prefix, "SnapshotId"), params);
    }
}

impl QuerySerialize for input::RevokeSecurityGroupEgressRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.cidr_ip
            .serialize_query(&member_key(prefix, "CidrIp"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.from_port
            .serialize_query(&member_key(prefix, "FromPort"), params);
        self.group_id
            .serialize_query(&member_key(prefix, "GroupId"), params);
        self.ip_permissions
            .serialize_query(&member_key(prefix, "IpPermissions"), params);
        self.ip_protocol
            .serialize_query(&member_key(prefix, "IpProtocol"), params);
        self.source_security_group_name
            .serialize_query(&member_key(prefix, "SourceSecurityGroupName"), params);
        self.source_security_group_owner_id
            .serialize_query(&member_key(prefix, "SourceSecurityGroupOwnerId"), params);
        self.to_port
            .serialize_query(&member_key(prefix, "ToPort"), params);
    }
}

impl QuerySerialize for input::RevokeSecurityGroupIngressRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.cidr_ip
            .serialize_query(&member_key(prefix, "CidrIp"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.from_port
            .serialize_query(&member_key(prefix, "FromPort"), params);
        self.group_id
            .serialize_query(&member_key(prefix, "GroupId"), params);
        self.group_name
            .serialize_query(&member_key(prefix, "GroupName"), params);
        self.ip_permissions
            .serialize_query(&member_key(prefix, "IpPermissions"), params);
        self.ip_protocol
            .serialize_query(&member_key(prefix, "IpProtocol"), params);
        self.source_security_group_name
            .serialize_query(&member_key(prefix, "SourceSecurityGroupName"), params);
        self.source_security_group_owner_id
            .serialize_query(&member_key(prefix, "SourceSecurityGroupOwnerId"), params);
        self.to_port
            .serialize_query(&member_key(prefix, "ToPort"), params);
    }
}

impl QuerySerialize for types::RunInstancesMonitoringEnabled {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.enabled
            .serialize_query(&member_key(prefix, "Enabled"), params);
    }
}

impl QuerySerialize for input::RunInstancesRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.additional_info
            .serialize_query(&member_key(prefix, "AdditionalInfo"), params);
        self.block_device_mappings
            .serialize_query(&member_key(prefix, "BlockDeviceMapping"), params);
        self.client_token
            .serialize_query(&member_key(prefix, "ClientToken"), params);
        self.disable_api_termination
            .serialize_query(&member_key(prefix, "DisableApiTermination"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.ebs_optimized
            .serialize_query(&member_key(prefix, "EbsOptimized"), params);
        self.iam_instance_profile
            .serialize_query(&member_key(prefix, "IamInstanceProfile"), params);
        self.image_id
            .serialize_query(&member_key(prefix, "ImageId"), params);
        self.instance_initiated_shutdown_behavior
            .serialize_query(&member_key(prefix, "InstanceInitiatedShutdownBehavior"), params);
        self.instance_type
            .serialize_query(&member_key(prefix, "InstanceType"), params);
        self.kernel_id
            .serialize_query(&member_key(prefix, "KernelId"), params);
        self.key_name
            .serialize_query(&member_key(prefix, "KeyName"), params);
        self.max_count
            .serialize_query(&member_key(prefix, "MaxCount"), params);
        self.min_count
            .serialize_query(&member_key(prefix, "MinCount"), params);
        self.monitoring
            .serialize_query(&member_key(prefix, "Monitoring"), params);
        self.network_interfaces
            .serialize_query(&member_key(prefix, "NetworkInterface"), params);
        self.placement
            .serialize_query(&member_key(prefix, "Placement"), params);
        self.private_ip_address
            .serialize_query(&member_key(prefix, "PrivateIpAddress"), params);
        self.ramdisk_id
            .serialize_query(&member_key(prefix, "RamdiskId"), params);
        self.security_group_ids
            .serialize_query(&member_key(prefix, "SecurityGroupId"), params);
        self.security_groups
            .serialize_query(&member_key(prefix, "SecurityGroup"), params);
        self.subnet_id
            .serialize_query(&member_key(prefix, "SubnetId"), params);
        self.user_data
            .serialize_query(&member_key(prefix, "UserData"), params);
    }
}

impl QuerySerialize for types::S3Storage {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.aws_access_key_id
            .serialize_query(&member_key(prefix, "AWSAccessKeyId"), params);
        self.bucket
            .serialize_query(&member_key(prefix, "Bucket"), params);
        self.prefix
            .serialize_query(&member_key(prefix, "Prefix"), params);
        self.upload_policy
            .serialize_query(&member_key(prefix, "UploadPolicy"), params);
        self.upload_policy_signature
            .serialize_query(&member_key(prefix, "UploadPolicySignature"), params);
    }
}

impl QuerySerialize for types::SpotPlacement {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.availability_zone
            .serialize_query(&member_key(prefix, "AvailabilityZone"), params);
        self.group_name
            .serialize_query(&member_key(prefix, "GroupName"), params);
    }
}

impl QuerySerialize for input::StartInstancesRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.additional_info
            .serialize_query(&member_key(prefix, "AdditionalInfo"), params);
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.instance_ids
            .serialize_query(&member_key(prefix, "InstanceId"), params);
    }
}

impl QuerySerialize for input::StopInstancesRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.force
            .serialize_query(&member_key(prefix, "Force"), params);
        self.instance_ids
            .serialize_query(&member_key(prefix, "InstanceId"), params);
    }
}

impl QuerySerialize for types::Storage {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.s3
            .serialize_query(&member_key(prefix, "S3"), params);
    }
}

impl QuerySerialize for types::Tag {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.key
            .serialize_query(&member_key(prefix, "Key"), params);
        self.value
            .serialize_query(&member_key(prefix, "Value"), params);
    }
}

impl QuerySerialize for input::TerminateInstancesRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.instance_ids
            .serialize_query(&member_key(prefix, "InstanceId"), params);
    }
}

impl QuerySerialize for input::UnassignPrivateIpAddressesRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.network_interface_id
            .serialize_query(&member_key(prefix, "NetworkInterfaceId"), params);
        self.private_ip_addresses
            .serialize_query(&member_key(prefix, "PrivateIpAddress"), params);
    }
}

impl QuerySerialize for input::UnmonitorInstancesRequest {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.dry_run
            .serialize_query(&member_key(prefix, "DryRun"), params);
        self.instance_ids
            .serialize_query(&member_key(prefix, "InstanceId"), params);
    }
}

impl QuerySerialize for types::UserIdGroupPair {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.group_id
            .serialize_query(&member_key(prefix, "GroupId"), params);
        self.group_name
            .serialize_query(&member_key(prefix, "GroupName"), params);
        self.user_id
            .serialize_query(&member_key(prefix, "UserId"), params);
    }
}

impl QuerySerialize for types::VolumeDetail {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.size
            .serialize_query(&member_key(prefix, "Size"), params);
    }
}

impl QuerySerialize for types::VpnConnectionOptionsSpecification {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        self.static_routes_only
            .serialize_query(&member_key(prefix, "StaticRoutesOnly"), params);
    }
}
