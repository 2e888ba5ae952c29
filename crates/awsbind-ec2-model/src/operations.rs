//! Auto-generated from the Amazon EC2 2014-10-01 API model. DO NOT EDIT.

use std::fmt;

/// All EC2 actions exposed by the 2014-10-01 API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ec2Operation {
    /// The AcceptVpcPeeringConnection action.
    AcceptVpcPeeringConnection,
    /// The AllocateAddress action.
    AllocateAddress,
    /// The AssignPrivateIpAddresses action.
    AssignPrivateIpAddresses,
    /// The AssociateAddress action.
    AssociateAddress,
    /// The AssociateDhcpOptions action.
    AssociateDhcpOptions,
    /// The AssociateRouteTable action.
    AssociateRouteTable,
    /// The AttachInternetGateway action.
    AttachInternetGateway,
    /// The AttachNetworkInterface action.
    AttachNetworkInterface,
    /// The AttachVolume action.
    AttachVolume,
    /// The AttachVpnGateway action.
    AttachVpnGateway,
    /// The AuthorizeSecurityGroupEgress action.
    AuthorizeSecurityGroupEgress,
    /// The AuthorizeSecurityGroupIngress action.
    AuthorizeSecurityGroupIngress,
    /// The BundleInstance action.
    BundleInstance,
    /// The CancelBundleTask action.
    CancelBundleTask,
    /// The CancelConversionTask action.
    CancelConversionTask,
    /// The CancelExportTask action.
    CancelExportTask,
    /// The CancelReservedInstancesListing action.
    CancelReservedInstancesListing,
    /// The CancelSpotInstanceRequests action.
    CancelSpotInstanceRequests,
    /// The ConfirmProductInstance action.
    ConfirmProductInstance,
    /// The CopyImage action.
    CopyImage,
    /// The CopySnapshot action.
    CopySnapshot,
    /// The CreateCustomerGateway action.
    CreateCustomerGateway,
    /// The CreateDhcpOptions action.
    CreateDhcpOptions,
    /// The CreateImage action.
    CreateImage,
    /// The CreateInstanceExportTask action.
    CreateInstanceExportTask,
    /// The CreateInternetGateway action.
    CreateInternetGateway,
    /// The CreateKeyPair action.
    CreateKeyPair,
    /// The CreateNetworkAcl action.
    CreateNetworkAcl,
    /// The CreateNetworkAclEntry action.
    CreateNetworkAclEntry,
    /// The CreateNetworkInterface action.
    CreateNetworkInterface,
    /// The CreatePlacementGroup action.
    CreatePlacementGroup,
    /// The CreateReservedInstancesListing action.
    CreateReservedInstancesListing,
    /// The CreateRoute action.
    CreateRoute,
    /// The CreateRouteTable action.
    CreateRouteTable,
    /// The CreateSecurityGroup action.
    CreateSecurityGroup,
    /// The CreateSnapshot action.
    CreateSnapshot,
    /// The CreateSpotDatafeedSubscription action.
    CreateSpotDatafeedSubscription,
    /// The CreateSubnet action.
    CreateSubnet,
    /// The CreateTags action.
    CreateTags,
    /// The CreateVolume action.
    CreateVolume,
    /// The CreateVpc action.
    CreateVpc,
    /// The CreateVpcPeeringConnection action.
    CreateVpcPeeringConnection,
    /// The CreateVpnConnection action.
    CreateVpnConnection,
    /// The CreateVpnConnectionRoute action.
    CreateVpnConnectionRoute,
    /// The CreateVpnGateway action.
    CreateVpnGateway,
    /// The DeleteCustomerGateway action.
    DeleteCustomerGateway,
    /// The DeleteDhcpOptions action.
    DeleteDhcpOptions,
    /// The DeleteInternetGateway action.
    DeleteInternetGateway,
    /// The DeleteKeyPair action.
    DeleteKeyPair,
    /// The DeleteNetworkAcl action.
    DeleteNetworkAcl,
    /// The DeleteNetworkAclEntry action.
    DeleteNetworkAclEntry,
    /// The DeleteNetworkInterface action.
    DeleteNetworkInterface,
    /// The DeletePlacementGroup action.
    DeletePlacementGroup,
    /// The DeleteRoute action.
    DeleteRoute,
    /// The DeleteRouteTable action.
    DeleteRouteTable,
    /// The DeleteSecurityGroup action.
    DeleteSecurityGroup,
    /// The DeleteSnapshot action.
    DeleteSnapshot,
    /// The DeleteSpotDatafeedSubscription action.
    DeleteSpotDatafeedSubscription,
    /// The DeleteSubnet action.
    DeleteSubnet,
    /// The DeleteTags action.
    DeleteTags,
    /// The DeleteVolume action.
    DeleteVolume,
    /// The DeleteVpc action.
    DeleteVpc,
    /// The DeleteVpcPeeringConnection action.
    DeleteVpcPeeringConnection,
    /// The DeleteVpnConnection action.
    DeleteVpnConnection,
    /// The DeleteVpnConnectionRoute action.
    DeleteVpnConnectionRoute,
    /// The DeleteVpnGateway action.
    DeleteVpnGateway,
    /// The DeregisterImage action.
    DeregisterImage,
    /// The DescribeAccountAttributes action.
    DescribeAccountAttributes,
    /// The DescribeAddresses action.
    DescribeAddresses,
    /// The DescribeAvailabilityZones action.
    DescribeAvailabilityZones,
    /// The DescribeBundleTasks action.
    DescribeBundleTasks,
    /// The DescribeConversionTasks action.
    DescribeConversionTasks,
    /// The DescribeCustomerGateways action.
    DescribeCustomerGateways,
    /// The DescribeDhcpOptions action.
    DescribeDhcpOptions,
    /// The DescribeExportTasks action.
    DescribeExportTasks,
    /// The DescribeImageAttribute action.
    DescribeImageAttribute,
    /// The DescribeImages action.
    DescribeImages,
    /// The DescribeInstanceAttribute action.
    DescribeInstanceAttribute,
    /// The DescribeInstanceStatus action.
    DescribeInstanceStatus,
    /// The DescribeInstances action.
    DescribeInstances,
    /// The DescribeInternetGateways action.
    DescribeInternetGateways,
    /// The DescribeKeyPairs action.
    DescribeKeyPairs,
    /// The DescribeNetworkAcls action.
    DescribeNetworkAcls,
    /// The DescribeNetworkInterfaceAttribute action.
    DescribeNetworkInterfaceAttribute,
    /// The DescribeNetworkInterfaces action.
    DescribeNetworkInterfaces,
    /// The DescribePlacementGroups action.
    DescribePlacementGroups,
    /// The DescribeRegions action.
    DescribeRegions,
    /// The DescribeReservedInstances action.
    DescribeReservedInstances,
    /// The DescribeReservedInstancesListings action.
    DescribeReservedInstancesListings,
    /// The DescribeReservedInstancesModifications action.
    DescribeReservedInstancesModifications,
    /// The DescribeReservedInstancesOfferings action.
    DescribeReservedInstancesOfferings,
    /// The DescribeRouteTables action.
    DescribeRouteTables,
    /// The DescribeSecurityGroups action.
    DescribeSecurityGroups,
    /// The DescribeSnapshotAttribute action.
    DescribeSnapshotAttribute,
    /// The DescribeSnapshots action.
    DescribeSnapshots,
    /// The DescribeSpotDatafeedSubscription action.
    DescribeSpotDatafeedSubscription,
    /// The DescribeSpotInstanceRequests action.
    DescribeSpotInstanceRequests,
    /// The DescribeSpotPriceHistory action.
    DescribeSpotPriceHistory,
    /// The DescribeSubnets action.
    DescribeSubnets,
    /// The DescribeTags action.
    DescribeTags,
    /// The DescribeVolumeAttribute action.
    DescribeVolumeAttribute,
    /// The DescribeVolumeStatus action.
    DescribeVolumeStatus,
    /// The DescribeVolumes action.
    DescribeVolumes,
    /// The DescribeVpcAttribute action.
    DescribeVpcAttribute,
    /// The DescribeVpcPeeringConnections action.
    DescribeVpcPeeringConnections,
    /// The DescribeVpcs action.
    DescribeVpcs,
    /// The DescribeVpnConnections action.
    DescribeVpnConnections,
    /// The DescribeVpnGateways action.
    DescribeVpnGateways,
    /// The DetachInternetGateway action.
    DetachInternetGateway,
    /// The DetachNetworkInterface action.
    DetachNetworkInterface,
    /// The DetachVolume action.
    DetachVolume,
    /// The DetachVpnGateway action.
    DetachVpnGateway,
    /// The DisableVgwRoutePropagation action.
    DisableVgwRoutePropagation,
    /// The DisassociateAddress action.
    DisassociateAddress,
    /// The DisassociateRouteTable action.
    DisassociateRouteTable,
    /// The EnableVgwRoutePropagation action.
    EnableVgwRoutePropagation,
    /// The EnableVolumeIO action.
    EnableVolumeIo,
    /// The GetConsoleOutput action.
    GetConsoleOutput,
    /// The GetPasswordData action.
    GetPasswordData,
    /// The ImportInstance action.
    ImportInstance,
    /// The ImportKeyPair action.
    ImportKeyPair,
    /// The ImportVolume action.
    ImportVolume,
    /// The ModifyImageAttribute action.
    ModifyImageAttribute,
    /// The ModifyInstanceAttribute action.
    ModifyInstanceAttribute,
    /// The ModifyNetworkInterfaceAttribute action.
    ModifyNetworkInterfaceAttribute,
    /// The ModifyReservedInstances action.
    ModifyReservedInstances,
    /// The ModifySnapshotAttribute action.
    ModifySnapshotAttribute,
    /// The ModifySubnetAttribute action.
    ModifySubnetAttribute,
    /// The ModifyVolumeAttribute action.
    ModifyVolumeAttribute,
    /// The ModifyVpcAttribute action.
    ModifyVpcAttribute,
    /// The MonitorInstances action.
    MonitorInstances,
    /// The PurchaseReservedInstancesOffering action.
    PurchaseReservedInstancesOffering,
    /// The RebootInstances action.
    RebootInstances,
    /// The RegisterImage action.
    RegisterImage,
    /// The RejectVpcPeeringConnection action.
    RejectVpcPeeringConnection,
    /// The ReleaseAddress action.
    ReleaseAddress,
    /// The ReplaceNetworkAclAssociation action.
    ReplaceNetworkAclAssociation,
    /// The ReplaceNetworkAclEntry action.
    ReplaceNetworkAclEntry,
    /// The ReplaceRoute action.
    ReplaceRoute,
    /// The ReplaceRouteTableAssociation action.
    ReplaceRouteTableAssociation,
    /// The ReportInstanceStatus action.
    ReportInstanceStatus,
    /// The RequestSpotInstances action.
    RequestSpotInstances,
    /// The ResetImageAttribute action.
    ResetImageAttribute,
    /// The ResetInstanceAttribute action.
    ResetInstanceAttribute,
    /// The ResetNetworkInterfaceAttribute action.
    ResetNetworkInterfaceAttribute,
    /// The ResetSnapshotAttribute action.
    ResetSnapshotAttribute,
    /// The RevokeSecurityGroupEgress action.
    RevokeSecurityGroupEgress,
    /// The RevokeSecurityGroupIngress action.
    RevokeSecurityGroupIngress,
    /// The RunInstances action.
    RunInstances,
    /// The StartInstances action.
    StartInstances,
    /// The StopInstances action.
    StopInstances,
    /// The TerminateInstances action.
    TerminateInstances,
    /// The UnassignPrivateIpAddresses action.
    UnassignPrivateIpAddresses,
    /// The UnmonitorInstances action.
    UnmonitorInstances,
}

impl Ec2Operation {
    /// Every operation, in alphabetical order.
    pub const ALL: &[Self] = &[
        Self::AcceptVpcPeeringConnection,
        Self::AllocateAddress,
        Self::AssignPrivateIpAddresses,
        Self::AssociateAddress,
        Self::AssociateDhcpOptions,
        Self::AssociateRouteTable,
        Self::AttachInternetGateway,
        Self::AttachNetworkInterface,
        Self::AttachVolume,
        Self::AttachVpnGateway,
        Self::AuthorizeSecurityGroupEgress,
        Self::AuthorizeSecurityGroupIngress,
        Self::BundleInstance,
        Self::CancelBundleTask,
        Self::CancelConversionTask,
        Self::CancelExportTask,
        Self::CancelReservedInstancesListing,
        Self::CancelSpotInstanceRequests,
        Self::ConfirmProductInstance,
        Self::CopyImage,
        Self::CopySnapshot,
        Self::CreateCustomerGateway,
        Self::CreateDhcpOptions,
        Self::CreateImage,
        Self::CreateInstanceExportTask,
        Self::CreateInternetGateway,
        Self::CreateKeyPair,
        Self::CreateNetworkAcl,
        Self::CreateNetworkAclEntry,
        Self::CreateNetworkInterface,
        Self::CreatePlacementGroup,
        Self::CreateReservedInstancesListing,
        Self::CreateRoute,
        Self::CreateRouteTable,
        Self::CreateSecurityGroup,
        Self::CreateSnapshot,
        Self::CreateSpotDatafeedSubscription,
        Self::CreateSubnet,
        Self::CreateTags,
        Self::CreateVolume,
        Self::CreateVpc,
        Self::CreateVpcPeeringConnection,
        Self::CreateVpnConnection,
        Self::CreateVpnConnectionRoute,
        Self::CreateVpnGateway,
        Self::DeleteCustomerGateway,
        Self::DeleteDhcpOptions,
        Self::DeleteInternetGateway,
        Self::DeleteKeyPair,
        Self::DeleteNetworkAcl,
        Self::DeleteNetworkAclEntry,
        Self::DeleteNetworkInterface,
        Self::DeletePlacementGroup,
        Self::DeleteRoute,
        Self::DeleteRouteTable,
        Self::DeleteSecurityGroup,
        Self::DeleteSnapshot,
        Self::DeleteSpotDatafeedSubscription,
        Self::DeleteSubnet,
        Self::DeleteTags,
        Self::DeleteVolume,
        Self::DeleteVpc,
        Self::DeleteVpcPeeringConnection,
        Self::DeleteVpnConnection,
        Self::DeleteVpnConnectionRoute,
        Self::DeleteVpnGateway,
        Self::DeregisterImage,
        Self::DescribeAccountAttributes,
        Self::DescribeAddresses,
        Self::DescribeAvailabilityZones,
        Self::DescribeBundleTasks,
        Self::DescribeConversionTasks,
        Self::DescribeCustomerGateways,
        Self::DescribeDhcpOptions,
        Self::DescribeExportTasks,
        Self::DescribeImageAttribute,
        Self::DescribeImages,
        Self::DescribeInstanceAttribute,
        Self::DescribeInstanceStatus,
        Self::DescribeInstances,
        Self::DescribeInternetGateways,
        Self::DescribeKeyPairs,
        Self::DescribeNetworkAcls,
        Self::DescribeNetworkInterfaceAttribute,
        Self::DescribeNetworkInterfaces,
        Self::DescribePlacementGroups,
        Self::DescribeRegions,
        Self::DescribeReservedInstances,
        Self::DescribeReservedInstancesListings,
        Self::DescribeReservedInstancesModifications,
        Self::DescribeReservedInstancesOfferings,
        Self::DescribeRouteTables,
        Self::DescribeSecurityGroups,
        Self::DescribeSnapshotAttribute,
        Self::DescribeSnapshots,
        Self::DescribeSpotDatafeedSubscription,
        Self::DescribeSpotInstanceRequests,
        Self::DescribeSpotPriceHistory,
        Self::DescribeSubnets,
        Self::DescribeTags,
        Self::DescribeVolumeAttribute,
        Self::DescribeVolumeStatus,
        Self::DescribeVolumes,
        Self::DescribeVpcAttribute,
        Self::DescribeVpcPeeringConnections,
        Self::DescribeVpcs,
        Self::DescribeVpnConnections,
        Self::DescribeVpnGateways,
        Self::DetachInternetGateway,
        Self::DetachNetworkInterface,
        Self::DetachVolume,
        Self::DetachVpnGateway,
        Self::DisableVgwRoutePropagation,
        Self::DisassociateAddress,
        Self::DisassociateRouteTable,
        Self::EnableVgwRoutePropagation,
        Self::EnableVolumeIo,
        Self::GetConsoleOutput,
        Self::GetPasswordData,
        Self::ImportInstance,
        Self::ImportKeyPair,
        Self::ImportVolume,
        Self::ModifyImageAttribute,
        Self::ModifyInstanceAttribute,
        Self::ModifyNetworkInterfaceAttribute,
        Self::ModifyReservedInstances,
        Self::ModifySnapshotAttribute,
        Self::ModifySubnetAttribute,
        Self::ModifyVolumeAttribute,
        Self::ModifyVpcAttribute,
        Self::MonitorInstances,
        Self::PurchaseReservedInstancesOffering,
        Self::RebootInstances,
        Self::RegisterImage,
        Self::RejectVpcPeeringConnection,
        Self::ReleaseAddress,
        Self::ReplaceNetworkAclAssociation,
        Self::ReplaceNetworkAclEntry,
        Self::ReplaceRoute,
        Self::ReplaceRouteTableAssociation,
        Self::ReportInstanceStatus,
        Self::RequestSpotInstances,
        Self::ResetImageAttribute,
        Self::ResetInstanceAttribute,
        Self::ResetNetworkInterfaceAttribute,
        Self::ResetSnapshotAttribute,
        Self::RevokeSecurityGroupEgress,
        Self::RevokeSecurityGroupIngress,
        Self::RunInstances,
        Self::StartInstances,
        Self::StopInstances,
        Self::TerminateInstances,
        Self::UnassignPrivateIpAddresses,
        Self::UnmonitorInstances,
    ];

    /// Returns the `Action` query parameter value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AcceptVpcPeeringConnection => "AcceptVpcPeeringConnection",
            Self::AllocateAddress => "AllocateAddress",
            Self::AssignPrivateIpAddresses => "AssignPrivateIpAddresses",
            Self::AssociateAddress => "AssociateAddress",
            Self::AssociateDhcpOptions => "AssociateDhcpOptions",
            Self::AssociateRouteTable => "AssociateRouteTable",
            Self::AttachInternetGateway => "AttachInternetGateway",
            Self::AttachNetworkInterface => "AttachNetworkInterface",
            Self::AttachVolume => "AttachVolume",
            Self::AttachVpnGateway => "AttachVpnGateway",
            Self::AuthorizeSecurityGroupEgress => "AuthorizeSecurityGroupEgress",
            Self::AuthorizeSecurityGroupIngress => "AuthorizeSecurityGroupIngress",
            Self::BundleInstance => "BundleInstance",
            Self::CancelBundleTask => "CancelBundleTask",
            Self::CancelConversionTask => "CancelConversionTask",
            Self::CancelExportTask => "CancelExportTask",
            Self::CancelReservedInstancesListing => "CancelReservedInstancesListing",
            Self::CancelSpotInstanceRequests => "CancelSpotInstanceRequests",
            Self::ConfirmProductInstance => "ConfirmProductInstance",
            Self::CopyImage => "CopyImage",
            Self::CopySnapshot => "CopySnapshot",
            Self::CreateCustomerGateway => "CreateCustomerGateway",
            Self::CreateDhcpOptions => "CreateDhcpOptions",
            Self::CreateImage => "CreateImage",
            Self::CreateInstanceExportTask => "CreateInstanceExportTask",
            Self::CreateInternetGateway => "CreateInternetGateway",
            Self::CreateKeyPair => "CreateKeyPair",
            Self::CreateNetworkAcl => "CreateNetworkAcl",
            Self::CreateNetworkAclEntry => "CreateNetworkAclEntry",
            Self::CreateNetworkInterface => "CreateNetworkInterface",
            Self::CreatePlacementGroup => "CreatePlacementGroup",
            Self::CreateReservedInstancesListing => "CreateReservedInstancesListing",
            Self::CreateRoute => "CreateRoute",
            Self::CreateRouteTable => "CreateRouteTable",
            Self::CreateSecurityGroup => "CreateSecurityGroup",
            Self::CreateSnapshot => "CreateSnapshot",
            Self::CreateSpotDatafeedSubscription => "CreateSpotDatafeedSubscription",
            Self::CreateSubnet => "CreateSubnet",
            Self::CreateTags => "CreateTags",
            Self::CreateVolume => "CreateVolume",
            Self::CreateVpc => "CreateVpc",
            Self::CreateVpcPeeringConnection => "CreateVpcPeeringConnection",
            Self::CreateVpnConnection => "CreateVpnConnection",
            Self::CreateVpnConnectionRoute => "CreateVpnConnectionRoute",
            Self::CreateVpnGateway => "CreateVpnGateway",
            Self::DeleteCustomerGateway => "DeleteCustomerGateway",
            Self::DeleteDhcpOptions => "DeleteDhcpOptions",
            Self::DeleteInternetGateway => "DeleteInternetGateway",
            Self::DeleteKeyPair => "DeleteKeyPair",
            Self::DeleteNetworkAcl => "DeleteNetworkAcl",
            Self::DeleteNetworkAclEntry => "DeleteNetworkAclEntry",
            Self::DeleteNetworkInterface => "DeleteNetworkInterface",
            Self::DeletePlacementGroup => "DeletePlacementGroup",
            Self::DeleteRoute => "DeleteRoute",
            Self::DeleteRouteTable => "DeleteRouteTable",
            Self::DeleteSecurityGroup => "DeleteSecurityGroup",
            Self::DeleteSnapshot => "DeleteSnapshot",
            Self::DeleteSpotDatafeedSubscription => "DeleteSpotDatafeedSubscription",
            Self::DeleteSubnet => "DeleteSubnet",
            Self::DeleteTags => "DeleteTags",
            Self::DeleteVolume => "DeleteVolume",
            Self::DeleteVpc => "DeleteVpc",
            Self::DeleteVpcPeeringConnection => "DeleteVpcPeeringConnection",
            Self::DeleteVpnConnection => "DeleteVpnConnection",
            Self::DeleteVpnConnectionRoute => "DeleteVpnConnectionRoute",
            Self::DeleteVpnGateway => "DeleteVpnGateway",
            Self::DeregisterImage => "DeregisterImage",
            Self::DescribeAccountAttributes => "DescribeAccountAttributes",
            Self::DescribeAddresses => "DescribeAddresses",
            Self::DescribeAvailabilityZones => "DescribeAvailabilityZones",
            Self::DescribeBundleTasks => "DescribeBundleTasks",
            Self::DescribeConversionTasks => "DescribeConversionTasks",
            Self::DescribeCustomerGateways => "DescribeCustomerGateways",
            Self::DescribeDhcpOptions => "DescribeDhcpOptions",
            Self::DescribeExportTasks => "DescribeExportTasks",
            Self::DescribeImageAttribute => "DescribeImageAttribute",
            Self::DescribeImages => "DescribeImages",
            Self::DescribeInstanceAttribute => "DescribeInstanceAttribute",
            Self::DescribeInstanceStatus => "DescribeInstanceStatus",
            Self::DescribeInstances => "DescribeInstances",
            Self::DescribeInternetGateways => "DescribeInternetGateways",
            Self::DescribeKeyPairs => "DescribeKeyPairs",
            Self::DescribeNetworkAcls => "DescribeNetworkAcls",
            Self::DescribeNetworkInterfaceAttribute => "DescribeNetworkInterfaceAttribute",
            Self::DescribeNetworkInterfaces => "DescribeNetworkInterfaces",
            Self::DescribePlacementGroups => "DescribePlacementGroups",
            Self::DescribeRegions => "DescribeRegions",
            Self::DescribeReservedInstances => "DescribeReservedInstances",
            Self::DescribeReservedInstancesListings => "DescribeReservedInstancesListings",
            Self::DescribeReservedInstancesModifications => "DescribeReservedInstancesModifications",
            Self::DescribeReservedInstancesOfferings => "DescribeReservedInstancesOfferings",
            Self::DescribeRouteTables => "DescribeRouteTables",
            Self::DescribeSecurityGroups => "DescribeSecurityGroups",
            Self::DescribeSnapshotAttribute => "DescribeSnapshotAttribute",
            Self::DescribeSnapshots => "DescribeSnapshots",
            Self::DescribeSpotDatafeedSubscription => "DescribeSpotDatafeedSubscription",
            Self::DescribeSpotInstanceRequests => "DescribeSpotInstanceRequests",
            Self::DescribeSpotPriceHistory => "DescribeSpotPriceHistory",
            Self::DescribeSubnets => "DescribeSubnets",
            Self::DescribeTags => "DescribeTags",
            Self::DescribeVolumeAttribute => "DescribeVolumeAttribute",
            Self::DescribeVolumeStatus => "DescribeVolumeStatus",
            Self::DescribeVolumes => "DescribeVolumes",
            Self::DescribeVpcAttribute => "DescribeVpcAttribute",
            Self::DescribeVpcPeeringConnections => "DescribeVpcPeeringConnections",
            Self::DescribeVpcs => "DescribeVpcs",
            Self::DescribeVpnConnections => "DescribeVpnConnections",
            Self::DescribeVpnGateways => "DescribeVpnGateways",
            Self::DetachInternetGateway => "DetachInternetGateway",
            Self::DetachNetworkInterface => "DetachNetworkInterface",
            Self::DetachVolume => "DetachVolume",
            Self::DetachVpnGateway => "DetachVpnGateway",
            Self::DisableVgwRoutePropagation => "DisableVgwRoutePropagation",
            Self::DisassociateAddress => "DisassociateAddress",
            Self::DisassociateRouteTable => "DisassociateRouteTable",
            Self::EnableVgwRoutePropagation => "EnableVgwRoutePropagation",
            Self::EnableVolumeIo => "EnableVolumeIO",
            Self::GetConsoleOutput => "GetConsoleOutput",
            Self::GetPasswordData => "GetPasswordData",
            Self::ImportInstance => "ImportInstance",
            Self::ImportKeyPair => "ImportKeyPair",
            Self::ImportVolume => "ImportVolume",
            Self::ModifyImageAttribute => "ModifyImageAttribute",
            Self::ModifyInstanceAttribute => "ModifyInstanceAttribute",
            Self::ModifyNetworkInterfaceAttribute => "ModifyNetworkInterfaceAttribute",
            Self::ModifyReservedInstances => "ModifyReservedInstances",
            Self::ModifySnapshotAttribute => "ModifySnapshotAttribute",
            Self::ModifySubnetAttribute => "ModifySubnetAttribute",
            Self::ModifyVolumeAttribute => "ModifyVolumeAttribute",
            Self::ModifyVpcAttribute => "ModifyVpcAttribute",
            Self::MonitorInstances => "MonitorInstances",
            Self::PurchaseReservedInstancesOffering => "PurchaseReservedInstancesOffering",
            Self::RebootInstances => "RebootInstances",
            Self::RegisterImage => "RegisterImage",
            Self::RejectVpcPeeringConnection => "RejectVpcPeeringConnection",
            Self::ReleaseAddress => "ReleaseAddress",
            Self::ReplaceNetworkAclAssociation => "ReplaceNetworkAclAssociation",
            Self::ReplaceNetworkAclEntry => "ReplaceNetworkAclEntry",
            Self::ReplaceRoute => "ReplaceRoute",
            Self::ReplaceRouteTableAssociation => "ReplaceRouteTableAssociation",
            Self::ReportInstanceStatus => "ReportInstanceStatus",
            Self::RequestSpotInstances => "RequestSpotInstances",
            Self::ResetImageAttribute => "ResetImageAttribute",
            Self::ResetInstanceAttribute => "ResetInstanceAttribute",
            Self::ResetNetworkInterfaceAttribute => "ResetNetworkInterfaceAttribute",
            Self::ResetSnapshotAttribute => "ResetSnapshotAttribute",
            Self::RevokeSecurityGroupEgress => "RevokeSecurityGroupEgress",
            Self::RevokeSecurityGroupIngress => "RevokeSecurityGroupIngress",
            Self::RunInstances => "RunInstances",
            Self::StartInstances => "StartInstances",
            Self::StopInstances => "StopInstances",
            Self::TerminateInstances => "TerminateInstances",
            Self::UnassignPrivateIpAddresses => "UnassignPrivateIpAddresses",
            Self::UnmonitorInstances => "UnmonitorInstances",
        }
    }

    /// Parse an `Action` name into an `Ec2Operation`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "AcceptVpcPeeringConnection" => Some(Self::AcceptVpcPeeringConnection),
            "AllocateAddress" => Some(Self::AllocateAddress),
            "AssignPrivateIpAddresses" => Some(Self::AssignPrivateIpAddresses),
            "AssociateAddress" => Some(Self::AssociateAddress),
            "AssociateDhcpOptions" => Some(Self::AssociateDhcpOptions),
            "AssociateRouteTable" => Some(Self::AssociateRouteTable),
            "AttachInternetGateway" => Some(Self::AttachInternetGateway),
            "AttachNetworkInterface" => Some(Self::AttachNetworkInterface),
            "AttachVolume" => Some(Self::AttachVolume),
            "AttachVpnGateway" => Some(Self::AttachVpnGateway),
            "AuthorizeSecurityGroupEgress" => Some(Self::AuthorizeSecurityGroupEgress),
            "AuthorizeSecurityGroupIngress" => Some(Self::AuthorizeSecurityGroupIngress),
            "BundleInstance" => Some(Self::BundleInstance),
            "CancelBundleTask" => Some(Self::CancelBundleTask),
            "CancelConversionTask" => Some(Self::CancelConversionTask),
            "CancelExportTask" => Some(Self::CancelExportTask),
            "CancelReservedInstancesListing" => Some(Self::CancelReservedInstancesListing),
            "CancelSpotInstanceRequests" => Some(Self::CancelSpotInstanceRequests),
            "ConfirmProductInstance" => Some(Self::ConfirmProductInstance),
            "CopyImage" => Some(Self::CopyImage),
            "CopySnapshot" => Some(Self::CopySnapshot),
            "CreateCustomerGateway" => Some(Self::CreateCustomerGateway),
            "CreateDhcpOptions" => Some(Self::CreateDhcpOptions),
            "CreateImage" => Some(Self::CreateImage),
            "CreateInstanceExportTask" => Some(Self::CreateInstanceExportTask),
            "CreateInternetGateway" => Some(Self::CreateInternetGateway),
            "CreateKeyPair" => Some(Self::CreateKeyPair),
            "CreateNetworkAcl" => Some(Self::CreateNetworkAcl),
            "CreateNetworkAclEntry" => Some(Self::CreateNetworkAclEntry),
            "CreateNetworkInterface" => Some(Self::CreateNetworkInterface),
            "CreatePlacementGroup" => Some(Self::CreatePlacementGroup),
            "CreateReservedInstancesListing" => Some(Self::CreateReservedInstancesListing),
            "CreateRoute" => Some(Self::CreateRoute),
            "CreateRouteTable" => Some(Self::CreateRouteTable),
            "CreateSecurityGroup" => Some(Self::CreateSecurityGroup),
            "CreateSnapshot" => Some(Self::CreateSnapshot),
            "CreateSpotDatafeedSubscription" => Some(Self::CreateSpotDatafeedSubscription),
            "CreateSubnet" => Some(Self::CreateSubnet),
            "CreateTags" => Some(Self::CreateTags),
            "CreateVolume" => Some(Self::CreateVolume),
            "CreateVpc" => Some(Self::CreateVpc),
            "CreateVpcPeeringConnection" => Some(Self::CreateVpcPeeringConnection),
            "CreateVpnConnection" => Some(Self::CreateVpnConnection),
            "CreateVpnConnectionRoute" => Some(Self::CreateVpnConnectionRoute),
            "CreateVpnGateway" => Some(Self::CreateVpnGateway),
            "DeleteCustomerGateway" => Some(Self::DeleteCustomerGateway),
            "DeleteDhcpOptions" => Some(Self::DeleteDhcpOptions),
            "DeleteInternetGateway" => Some(Self::DeleteInternetGateway),
            "DeleteKeyPair" => Some(Self::DeleteKeyPair),
            "DeleteNetworkAcl" => Some(Self::DeleteNetworkAcl),
            "DeleteNetworkAclEntry" => Some(Self::DeleteNetworkAclEntry),
            "DeleteNetworkInterface" => Some(Self::DeleteNetworkInterface),
            "DeletePlacementGroup" => Some(Self::DeletePlacementGroup),
            "DeleteRoute" => Some(Self::DeleteRoute),
            "DeleteRouteTable" => Some(Self::DeleteRouteTable),
            "DeleteSecurityGroup" => Some(Self::DeleteSecurityGroup),
            "DeleteSnapshot" => Some(Self::DeleteSnapshot),
            "DeleteSpotDatafeedSubscription" => Some(Self::DeleteSpotDatafeedSubscription),
            "DeleteSubnet" => Some(Self::DeleteSubnet),
            "DeleteTags" => Some(Self::DeleteTags),
            "DeleteVolume" => Some(Self::DeleteVolume),
            "DeleteVpc" => Some(Self::DeleteVpc),
            "DeleteVpcPeeringConnection" => Some(Self::DeleteVpcPeeringConnection),
            "DeleteVpnConnection" => Some(Self::DeleteVpnConnection),
            "DeleteVpnConnectionRoute" => Some(Self::DeleteVpnConnectionRoute),
            "DeleteVpnGateway" => Some(Self::DeleteVpnGateway),
            "DeregisterImage" => Some(Self::DeregisterImage),
            "DescribeAccountAttributes" => Some(Self::DescribeAccountAttributes),
            "DescribeAddresses" => Some(Self::DescribeAddresses),
            "DescribeAvailabilityZones" => Some(Self::DescribeAvailabilityZones),
            "DescribeBundleTasks" => Some(Self::DescribeBundleTasks),
            "DescribeConversionTasks" => Some(Self::DescribeConversionTasks),
            "DescribeCustomerGateways" => Some(Self::DescribeCustomerGateways),
            "DescribeDhcpOptions" => Some(Self::DescribeDhcpOptions),
            "DescribeExportTasks" => Some(Self::DescribeExportTasks),
            "DescribeImageAttribute" => Some(Self::DescribeImageAttribute),
            "DescribeImages" => Some(Self::DescribeImages),
            "DescribeInstanceAttribute" => Some(Self::DescribeInstanceAttribute),
            "DescribeInstanceStatus" => Some(Self::DescribeInstanceStatus),
            "DescribeInstances" => Some(Self::DescribeInstances),
            "DescribeInternetGateways" => Some(Self::DescribeInternetGateways),
            "DescribeKeyPairs" => Some(Self::DescribeKeyPairs),
            "DescribeNetworkAcls" => Some(Self::DescribeNetworkAcls),
            "DescribeNetworkInterfaceAttribute" => Some(Self::DescribeNetworkInterfaceAttribute),
            "DescribeNetworkInterfaces" => Some(Self::DescribeNetworkInterfaces),
            "DescribePlacementGroups" => Some(Self::DescribePlacementGroups),
            "DescribeRegions" => Some(Self::DescribeRegions),
            "DescribeReservedInstances" => Some(Self::DescribeReservedInstances),
            "DescribeReservedInstancesListings" => Some(Self::DescribeReservedInstancesListings),
            "DescribeReservedInstancesModifications" => Some(Self::DescribeReservedInstancesModifications),
            "DescribeReservedInstancesOfferings" => Some(Self::DescribeReservedInstancesOfferings),
            "DescribeRouteTables" => Some(Self::DescribeRouteTables),
            "DescribeSecurityGroups" => Some(Self::DescribeSecurityGroups),
            "DescribeSnapshotAttribute" => Some(Self::DescribeSnapshotAttribute),
            "DescribeSnapshots" => Some(Self::DescribeSnapshots),
            "DescribeSpotDatafeedSubscription" => Some(Self::DescribeSpotDatafeedSubscription),
            "DescribeSpotInstanceRequests" => Some(Self::DescribeSpotInstanceRequests),
            "DescribeSpotPriceHistory" => Some(Self::DescribeSpotPriceHistory),
            "DescribeSubnets" => Some(Self::DescribeSubnets),
            "DescribeTags" => Some(Self::DescribeTags),
            "DescribeVolumeAttribute" => Some(Self::DescribeVolumeAttribute),
            "DescribeVolumeStatus" => Some(Self::DescribeVolumeStatus),
            "DescribeVolumes" => Some(Self::DescribeVolumes),
            "DescribeVpcAttribute" => Some(Self::DescribeVpcAttribute),
            "DescribeVpcPeeringConnections" => Some(Self::DescribeVpcPeeringConnections),
            "DescribeVpcs" => Some(Self::DescribeVpcs),
            "DescribeVpnConnections" => Some(Self::DescribeVpnConnections),
            "DescribeVpnGateways" => Some(Self::DescribeVpnGateways),
            "DetachInternetGateway" => Some(Self::DetachInternetGateway),
            "DetachNetworkInterface" => Some(Self::DetachNetworkInterface),
            "DetachVolume" => Some(Self::DetachVolume),
            "DetachVpnGateway" => Some(Self::DetachVpnGateway),
            "DisableVgwRoutePropagation" => Some(Self::DisableVgwRoutePropagation),
            "DisassociateAddress" => Some(Self::DisassociateAddress),
            "DisassociateRouteTable" => Some(Self::DisassociateRouteTable),
            "EnableVgwRoutePropagation" => Some(Self::EnableVgwRoutePropagation),
            "EnableVolumeIO" => Some(Self::EnableVolumeIo),
            "GetConsoleOutput" => Some(Self::GetConsoleOutput),
            "GetPasswordData" => Some(Self::GetPasswordData),
            "ImportInstance" => Some(Self::ImportInstance),
            "ImportKeyPair" => Some(Self::ImportKeyPair),
            "ImportVolume" => Some(Self::ImportVolume),
            "ModifyImageAttribute" => Some(Self::ModifyImageAttribute),
            "ModifyInstanceAttribute" => Some(Self::ModifyInstanceAttribute),
            "ModifyNetworkInterfaceAttribute" => Some(Self::ModifyNetworkInterfaceAttribute),
            "ModifyReservedInstances" => Some(Self::ModifyReservedInstances),
            "ModifySnapshotAttribute" => Some(Self::ModifySnapshotAttribute),
            "ModifySubnetAttribute" => Some(Self::ModifySubnetAttribute),
            "ModifyVolumeAttribute" => Some(Self::ModifyVolumeAttribute),
            "ModifyVpcAttribute" => Some(Self::ModifyVpcAttribute),
            "MonitorInstances" => Some(Self::MonitorInstances),
            "PurchaseReservedInstancesOffering" => Some(Self::PurchaseReservedInstancesOffering),
            "RebootInstances" => Some(Self::RebootInstances),
            "RegisterImage" => Some(Self::RegisterImage),
            "RejectVpcPeeringConnection" => Some(Self::RejectVpcPeeringConnection),
            "ReleaseAddress" => Some(Self::ReleaseAddress),
            "ReplaceNetworkAclAssociation" => Some(Self::ReplaceNetworkAclAssociation),
            "ReplaceNetworkAclEntry" => Some(Self::ReplaceNetworkAclEntry),
            "ReplaceRoute" => Some(Self::ReplaceRoute),
            "ReplaceRouteTableAssociation" => Some(Self::ReplaceRouteTableAssociation),
            "ReportInstanceStatus" => Some(Self::ReportInstanceStatus),
            "RequestSpotInstances" => Some(Self::RequestSpotInstances),
            "ResetImageAttribute" => Some(Self::ResetImageAttribute),
            "ResetInstanceAttribute" => Some(Self::ResetInstanceAttribute),
            "ResetNetworkInterfaceAttribute" => Some(Self::ResetNetworkInterfaceAttribute),
            "ResetSnapshotAttribute" => Some(Self::ResetSnapshotAttribute),
            "RevokeSecurityGroupEgress" => Some(Self::RevokeSecurityGroupEgress),
            "RevokeSecurityGroupIngress" => Some(Self::RevokeSecurityGroupIngress),
            "RunInstances" => Some(Self::RunInstances),
            "StartInstances" => Some(Self::StartInstances),
            "StopInstances" => Some(Self::StopInstances),
            "TerminateInstances" => Some(Self::TerminateInstances),
            "UnassignPrivateIpAddresses" => Some(Self::UnassignPrivateIpAddresses),
            "UnmonitorInstances" => Some(Self::UnmonitorInstances),
            _ => None,
        }
    }

    /// Whether the action returns a result document beyond `<return>`.
    #[must_use]
    pub fn has_output(&self) -> bool {
        !matches!(
            self,
            Self::AssignPrivateIpAddresses
            | Self::AssociateDhcpOptions
            | Self::AttachInternetGateway
            | Self::AuthorizeSecurityGroupEgress
            | Self::AuthorizeSecurityGroupIngress
            | Self::CancelConversionTask
            | Self::CancelExportTask
            | Self::CreateNetworkAclEntry
            | Self::CreatePlacementGroup
            | Self::CreateRoute
            | Self::CreateTags
            | Self::CreateVpnConnectionRoute
            | Self::DeleteCustomerGateway
            | Self::DeleteDhcpOptions
            | Self::DeleteInternetGateway
            | Self::DeleteKeyPair
            | Self::DeleteNetworkAcl
            | Self::DeleteNetworkAclEntry
            | Self::DeleteNetworkInterface
            | Self::DeletePlacementGroup
            | Self::DeleteRoute
            | Self::DeleteRouteTable
            | Self::DeleteSecurityGroup
            | Self::DeleteSnapshot
            | Self::DeleteSpotDatafeedSubscription
            | Self::DeleteSubnet
            | Self::DeleteTags
            | Self::DeleteVolume
            | Self::DeleteVpc
            | Self::DeleteVpnConnection
            | Self::DeleteVpnConnectionRoute
            | Self::DeleteVpnGateway
            | Self::DeregisterImage
            | Self::DetachInternetGateway
            | Self::DetachNetworkInterface
            | Self::DetachVpnGateway
            | Self::DisableVgwRoutePropagation
            | Self::DisassociateAddress
            | Self::DisassociateRouteTable
            | Self::EnableVgwRoutePropagation
            | Self::EnableVolumeIo
            | Self::ModifyImageAttribute
            | Self::ModifyInstanceAttribute
            | Self::ModifyNetworkInterfaceAttribute
            | Self::ModifySnapshotAttribute
            | Self::ModifySubnetAttribute
            | Self::ModifyVolumeAttribute
            | Self::ModifyVpcAttribute
            | Self::RebootInstances
            | Self::ReleaseAddress
            | Self::ReplaceNetworkAclEntry
            | Self::ReplaceRoute
            | Self::ReportInstanceStatus
            | Self::ResetImageAttribute
            | Self::ResetInstanceAttribute
            | Self::ResetNetworkInterfaceAttribute
            | Self::ResetSnapshotAttribute
            | Self::RevokeSecurityGroupEgress
            | Self::RevokeSecurityGroupIngress
            | Self::UnassignPrivateIpAddresses
        )
    }
}

impl fmt::Display for Ec2Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
