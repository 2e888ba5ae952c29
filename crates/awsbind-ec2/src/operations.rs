//! Auto-generated from the Amazon EC2 2014-10-01 API model. DO NOT EDIT.
//!
//! One client method per EC2 action.

use awsbind_ec2_model::{input, output, types};

use crate::client::ec2_operations;

ec2_operations! {
    accept_vpc_peering_connection => AcceptVpcPeeringConnection(input::AcceptVpcPeeringConnectionRequest) -> output::AcceptVpcPeeringConnectionResult;
    allocate_address => AllocateAddress(input::AllocateAddressRequest) -> output::AllocateAddressResult;
    assign_private_ip_addresses => AssignPrivateIpAddresses(input::AssignPrivateIpAddressesRequest);
    associate_address => AssociateAddress(input::AssociateAddressRequest) -> output::AssociateAddressResult;
    associate_dhcp_options => AssociateDhcpOptions(input::AssociateDhcpOptionsRequest);
    associate_route_table => AssociateRouteTable(input::AssociateRouteTableRequest) -> output::AssociateRouteTableResult;
    attach_internet_gateway => AttachInternetGateway(input::AttachInternetGatewayRequest);
    attach_network_interface => AttachNetworkInterface(input::AttachNetworkInterfaceRequest) -> output::AttachNetworkInterfaceResult;
    attach_volume => AttachVolume(input::AttachVolumeRequest) -> types::VolumeAttachment;
    attach_vpn_gateway => AttachVpnGateway(input::AttachVpnGatewayRequest) -> output::AttachVpnGatewayResult;
    authorize_security_group_egress => AuthorizeSecurityGroupEgress(input::AuthorizeSecurityGroupEgressRequest);
    authorize_security_group_ingress => AuthorizeSecurityGroupIngress(input::AuthorizeSecurityGroupIngressRequest);
    bundle_instance => BundleInstance(input::BundleInstanceRequest) -> output::BundleInstanceResult;
    cancel_bundle_task => CancelBundleTask(input::CancelBundleTaskRequest) -> output::CancelBundleTaskResult;
    cancel_conversion_task => CancelConversionTask(input::CancelConversionRequest);
    cancel_export_task => CancelExportTask(input::CancelExportTaskRequest);
    cancel_reserved_instances_listing => CancelReservedInstancesListing(input::CancelReservedInstancesListingRequest) -> output::CancelReservedInstancesListingResult;
    cancel_spot_instance_requests => CancelSpotInstanceRequests(input::CancelSpotInstanceRequestsRequest) -> output::CancelSpotInstanceRequestsResult;
    confirm_product_instance => ConfirmProductInstance(input::ConfirmProductInstanceRequest) -> output::ConfirmProductInstanceResult;
    copy_image => CopyImage(input::CopyImageRequest) -> output::CopyImageResult;
    copy_snapshot => CopySnapshot(input::CopySnapshotRequest) -> output::CopySnapshotResult;
    create_customer_gateway => CreateCustomerGateway(input::CreateCustomerGatewayRequest) -> output::CreateCustomerGatewayResult;
    create_dhcp_options => CreateDhcpOptions(input::CreateDhcpOptionsRequest) -> output::CreateDhcpOptionsResult;
    create_image => CreateImage(input::CreateImageRequest) -> output::CreateImageResult;
    create_instance_export_task => CreateInstanceExportTask(input::CreateInstanceExportTaskRequest) -> output::CreateInstanceExportTaskResult;
    create_internet_gateway => CreateInternetGateway(input::CreateInternetGatewayRequest) -> output::CreateInternetGatewayResult;
    create_key_pair => CreateKeyPair(input::CreateKeyPairRequest) -> types::KeyPair;
    create_network_acl => CreateNetworkAcl(input::CreateNetworkAclRequest) -> output::CreateNetworkAclResult;
    create_network_acl_entry => CreateNetworkAclEntry(input::CreateNetworkAclEntryRequest);
    create_network_interface => CreateNetworkInterface(input::CreateNetworkInterfaceRequest) -> output::CreateNetworkInterfaceResult;
    create_placement_group => CreatePlacementGroup(input::CreatePlacementGroupRequest);
    create_reserved_instances_listing => CreateReservedInstancesListing(input::CreateReservedInstancesListingRequest) -> output::CreateReservedInstancesListingResult;
    create_route => CreateRoute(input::CreateRouteRequest);
    create_route_table => CreateRouteTable(input::CreateRouteTableRequest) -> output::CreateRouteTableResult;
    create_security_group => CreateSecurityGroup(input::CreateSecurityGroupRequest) -> output::CreateSecurityGroupResult;
    create_snapshot => CreateSnapshot(input::CreateSnapshotRequest) -> types::Snapshot;
    create_spot_datafeed_subscription => CreateSpotDatafeedSubscription(input::CreateSpotDatafeedSubscriptionRequest) -> output::CreateSpotDatafeedSubscriptionResult;
    create_subnet => CreateSubnet(input::CreateSubnetRequest) -> output::CreateSubnetResult;
    create_tags => CreateTags(input::CreateTagsRequest);
    create_volume => CreateVolume(input::CreateVolumeRequest) -> types::Volume;
    create_vpc => CreateVpc(input::CreateVpcRequest) -> output::CreateVpcResult;
    create_vpc_peering_connection => CreateVpcPeeringConnection(input::CreateVpcPeeringConnectionRequest) -> output::CreateVpcPeeringConnectionResult;
    create_vpn_connection => CreateVpnConnection(input::CreateVpnConnectionRequest) -> output::CreateVpnConnectionResult;
    create_vpn_connection_route => CreateVpnConnectionRoute(input::CreateVpnConnectionRouteRequest);
    create_vpn_gateway => CreateVpnGateway(input::CreateVpnGatewayRequest) -> output::CreateVpnGatewayResult;
    delete_customer_gateway => DeleteCustomerGateway(input::DeleteCustomerGatewayRequest);
    delete_dhcp_options => DeleteDhcpOptions(input::DeleteDhcpOptionsRequest);
    delete_internet_gateway => DeleteInternetGateway(input::DeleteInternetGatewayRequest);
    delete_key_pair => DeleteKeyPair(input::DeleteKeyPairRequest);
    delete_network_acl => DeleteNetworkAcl(input::DeleteNetworkAclRequest);
    delete_network_acl_entry => DeleteNetworkAclEntry(input::DeleteNetworkAclEntryRequest);
    delete_network_interface => DeleteNetworkInterface(input::DeleteNetworkInterfaceRequest);
    delete_placement_group => DeletePlacementGroup(input::DeletePlacementGroupRequest);
    delete_route => DeleteRoute(input::DeleteRouteRequest);
    delete_route_table => DeleteRouteTable(input::DeleteRouteTableRequest);
    delete_security_group => DeleteSecurityGroup(input::DeleteSecurityGroupRequest);
    delete_snapshot => DeleteSnapshot(input::DeleteSnapshotRequest);
    delete_spot_datafeed_subscription => DeleteSpotDatafeedSubscription(input::DeleteSpotDatafeedSubscriptionRequest);
    delete_subnet => DeleteSubnet(input::DeleteSubnetRequest);
    delete_tags => DeleteTags(input::DeleteTagsRequest);
    delete_volume => DeleteVolume(input::DeleteVolumeRequest);
    delete_vpc => DeleteVpc(input::DeleteVpcRequest);
    delete_vpc_peering_connection => DeleteVpcPeeringConnection(input::DeleteVpcPeeringConnectionRequest) -> output::DeleteVpcPeeringConnectionResult;
    delete_vpn_connection => DeleteVpnConnection(input::DeleteVpnConnectionRequest);
    delete_vpn_connection_route => DeleteVpnConnectionRoute(input::DeleteVpnConnectionRouteRequest);
    delete_vpn_gateway => DeleteVpnGateway(input::DeleteVpnGatewayRequest);
    deregister_image => DeregisterImage(input::DeregisterImageRequest);
    describe_account_attributes => DescribeAccountAttributes(input::DescribeAccountAttributesRequest) -> output::DescribeAccountAttributesResult;
    describe_addresses => DescribeAddresses(input::DescribeAddressesRequest) -> output::DescribeAddressesResult;
    describe_availability_zones => DescribeAvailabilityZones(input::DescribeAvailabilityZonesRequest) -> output::DescribeAvailabilityZonesResult;
    describe_bundle_tasks => DescribeBundleTasks(input::DescribeBundleTasksRequest) -> output::DescribeBundleTasksResult;
    describe_conversion_tasks => DescribeConversionTasks(input::DescribeConversionTasksRequest) -> output::DescribeConversionTasksResult;
    describe_customer_gateways => DescribeCustomerGateways(input::DescribeCustomerGatewaysRequest) -> output::DescribeCustomerGatewaysResult;
    describe_dhcp_options => DescribeDhcpOptions(input::DescribeDhcpOptionsRequest) -> output::DescribeDhcpOptionsResult;
    describe_export_tasks => DescribeExportTasks(input::DescribeExportTasksRequest) -> output::DescribeExportTasksResult;
    describe_image_attribute => DescribeImageAttribute(input::DescribeImageAttributeRequest) -> types::ImageAttribute;
    describe_images => DescribeImages(input::DescribeImagesRequest) -> output::DescribeImagesResult;
    describe_instance_attribute => DescribeInstanceAttribute(input::DescribeInstanceAttributeRequest) -> types::InstanceAttribute;
    describe_instance_status => DescribeInstanceStatus(input::DescribeInstanceStatusRequest) -> output::DescribeInstanceStatusResult;
    describe_instances => DescribeInstances(input::DescribeInstancesRequest) -> output::DescribeInstancesResult;
    describe_internet_gateways => DescribeInternetGateways(input::DescribeInternetGatewaysRequest) -> output::DescribeInternetGatewaysResult;
    describe_key_pairs => DescribeKeyPairs(input::DescribeKeyPairsRequest) -> output::DescribeKeyPairsResult;
    describe_network_acls => DescribeNetworkAcls(input::DescribeNetworkAclsRequest) -> output::DescribeNetworkAclsResult;
    describe_network_interface_attribute => DescribeNetworkInterfaceAttribute(input::DescribeNetworkInterfaceAttributeRequest) -> output::DescribeNetworkInterfaceAttributeResult;
    describe_network_interfaces => DescribeNetworkInterfaces(input::DescribeNetworkInterfacesRequest) -> output::DescribeNetworkInterfacesResult;
    describe_placement_groups => DescribePlacementGroups(input::DescribePlacementGroupsRequest) -> output::DescribePlacementGroupsResult;
    describe_regions => DescribeRegions(input::DescribeRegionsRequest) -> output::DescribeRegionsResult;
    describe_reserved_instances => DescribeReservedInstances(input::DescribeReservedInstancesRequest) -> output::DescribeReservedInstancesResult;
    describe_reserved_instances_listings => DescribeReservedInstancesListings(input::DescribeReservedInstancesListingsRequest) -> output::DescribeReservedInstancesListingsResult;
    describe_reserved_instances_modifications => DescribeReservedInstancesModifications(input::DescribeReservedInstancesModificationsRequest) -> output::DescribeReservedInstancesModificationsResult;
    describe_reserved_instances_offerings => DescribeReservedInstancesOfferings(input::DescribeReservedInstancesOfferingsRequest) -> output::DescribeReservedInstancesOfferingsResult;
    describe_route_tables => DescribeRouteTables(input::DescribeRouteTablesRequest) -> output::DescribeRouteTablesResult;
    describe_security_groups => DescribeSecurityGroups(input::DescribeSecurityGroupsRequest) -> output::DescribeSecurityGroupsResult;
    describe_snapshot_attribute => DescribeSnapshotAttribute(input::DescribeSnapshotAttributeRequest) -> output::DescribeSnapshotAttributeResult;
    describe_snapshots => DescribeSnapshots(input::DescribeSnapshotsRequest) -> output::DescribeSnapshotsResult;
    describe_spot_datafeed_subscription => DescribeSpotDatafeedSubscription(input::DescribeSpotDatafeedSubscriptionRequest) -> output::DescribeSpotDatafeedSubscriptionResult;
    describe_spot_instance_requests => DescribeSpotInstanceRequests(input::DescribeSpotInstanceRequestsRequest) -> output::DescribeSpotInstanceRequestsResult;
    describe_spot_price_history => DescribeSpotPriceHistory(input::DescribeSpotPriceHistoryRequest) -> output::DescribeSpotPriceHistoryResult;
    describe_subnets => DescribeSubnets(input::DescribeSubnetsRequest) -> output::DescribeSubnetsResult;
    describe_tags => DescribeTags(input::DescribeTagsRequest) -> output::DescribeTagsResult;
    describe_volume_attribute => DescribeVolumeAttribute(input::DescribeVolumeAttributeRequest) -> output::DescribeVolumeAttributeResult;
    describe_volume_status => DescribeVolumeStatus(input::DescribeVolumeStatusRequest) -> output::DescribeVolumeStatusResult;
    describe_volumes => DescribeVolumes(input::DescribeVolumesRequest) -> output::DescribeVolumesResult;
    describe_vpc_attribute => DescribeVpcAttribute(input::DescribeVpcAttributeRequest) -> output::DescribeVpcAttributeResult;
    describe_vpc_peering_connections => DescribeVpcPeeringConnections(input::DescribeVpcPeeringConnectionsRequest) -> output::DescribeVpcPeeringConnectionsResult;
    describe_vpcs => DescribeVpcs(input::DescribeVpcsRequest) -> output::DescribeVpcsResult;
    describe_vpn_connections => DescribeVpnConnections(input::DescribeVpnConnectionsRequest) -> output::DescribeVpnConnectionsResult;
    describe_vpn_gateways => DescribeVpnGateways(input::DescribeVpnGatewaysRequest) -> output::DescribeVpnGatewaysResult;
    detach_internet_gateway => DetachInternetGateway(input::DetachInternetGatewayRequest);
    detach_network_interface => DetachNetworkInterface(input::DetachNetworkInterfaceRequest);
    detach_volume => DetachVolume(input::DetachVolumeRequest) -> types::VolumeAttachment;
    detach_vpn_gateway => DetachVpnGateway(input::DetachVpnGatewayRequest);
    disable_vgw_route_propagation => DisableVgwRoutePropagation(input::DisableVgwRoutePropagationRequest);
    disassociate_address => DisassociateAddress(input::DisassociateAddressRequest);
    disassociate_route_table => DisassociateRouteTable(input::DisassociateRouteTableRequest);
    enable_vgw_route_propagation => EnableVgwRoutePropagation(input::EnableVgwRoutePropagationRequest);
    enable_volume_io => EnableVolumeIo(input::EnableVolumeIoRequest);
    get_console_output => GetConsoleOutput(input::GetConsoleOutputRequest) -> output::GetConsoleOutputResult;
    get_password_data => GetPasswordData(input::GetPasswordDataRequest) -> output::GetPasswordDataResult;
    import_instance => ImportInstance(input::ImportInstanceRequest) -> output::ImportInstanceResult;
    import_key_pair => ImportKeyPair(input::ImportKeyPairRequest) -> output::ImportKeyPairResult;
    import_volume => ImportVolume(input::ImportVolumeRequest) -> output::ImportVolumeResult;
    modify_image_attribute => ModifyImageAttribute(input::ModifyImageAttributeRequest);
    modify_instance_attribute => ModifyInstanceAttribute(input::ModifyInstanceAttributeRequest);
    modify_network_interface_attribute => ModifyNetworkInterfaceAttribute(input::ModifyNetworkInterfaceAttributeRequest);
    modify_reserved_instances => ModifyReservedInstances(input::ModifyReservedInstancesRequest) -> output::ModifyReservedInstancesResult;
    modify_snapshot_attribute => ModifySnapshotAttribute(input::ModifySnapshotAttributeRequest);
    modify_subnet_attribute => ModifySubnetAttribute(input::ModifySubnetAttributeRequest);
    modify_volume_attribute => ModifyVolumeAttribute(input::ModifyVolumeAttributeRequest);
    modify_vpc_attribute => ModifyVpcAttribute(input::ModifyVpcAttributeRequest);
    monitor_instances => MonitorInstances(input::MonitorInstancesRequest) -> output::MonitorInstancesResult;
    purchase_reserved_instances_offering => PurchaseReservedInstancesOffering(input::PurchaseReservedInstancesOfferingRequest) -> output::PurchaseReservedInstancesOfferingResult;
    reboot_instances => RebootInstances(input::RebootInstancesRequest);
    register_image => RegisterImage(input::RegisterImageRequest) -> output::RegisterImageResult;
    reject_vpc_peering_connection => RejectVpcPeeringConnection(input::RejectVpcPeeringConnectionRequest) -> output::RejectVpcPeeringConnectionResult;
    release_address => ReleaseAddress(input::ReleaseAddressRequest);
    replace_network_acl_association => ReplaceNetworkAclAssociation(input::ReplaceNetworkAclAssociationRequest) -> output::ReplaceNetworkAclAssociationResult;
    replace_network_acl_entry => ReplaceNetworkAclEntry(input::ReplaceNetworkAclEntryRequest);
    replace_route => ReplaceRoute(input::ReplaceRouteRequest);
    replace_route_table_association => ReplaceRouteTableAssociation(input::ReplaceRouteTableAssociationRequest) -> output::ReplaceRouteTableAssociationResult;
    report_instance_status => ReportInstanceStatus(input::ReportInstanceStatusRequest);
    request_spot_instances => RequestSpotInstances(input::RequestSpotInstancesRequest) -> output::RequestSpotInstancesResult;
    reset_image_attribute => ResetImageAttribute(input::ResetImageAttributeRequest);
    reset_instance_attribute => ResetInstanceAttribute(input::ResetInstanceAttributeRequest);
    reset_network_interface_attribute => ResetNetworkInterfaceAttribute(input::ResetNetworkInterfaceAttributeRequest);
    reset_snapshot_attribute => ResetSnapshotAttribute(input::ResetSnapshotAttributeRequest);
    revoke_security_group_egress => RevokeSecurityGroupEgress(input::RevokeSecurityGroupEgressRequest);
    revoke_security_group_ingress => RevokeSecurityGroupIngress(input::RevokeSecurityGroupIngressRequest);
    run_instances => RunInstances(input::RunInstancesRequest) -> types::Reservation;
    start_instances => StartInstances(input::StartInstancesRequest) -> output::StartInstancesResult;
    stop_instances => StopInstances(input::StopInstancesRequest) -> output::StopInstancesResult;
    terminate_instances => TerminateInstances(input::TerminateInstancesRequest) -> output::TerminateInstancesResult;
    unassign_private_ip_addresses => UnassignPrivateIpAddresses(input::UnassignPrivateIpAddressesRequest);
    unmonitor_instances => UnmonitorInstances(input::UnmonitorInstancesRequest) -> output::UnmonitorInstancesResult;
}
