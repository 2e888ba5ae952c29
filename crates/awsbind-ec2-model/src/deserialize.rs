//! Auto-generated from the Amazon EC2 2014-10-01 API model. DO NOT EDIT.
//!
//! EC2 XML deserialization for every shape reachable from a response.

use awsbind_query::{Ec2Deserialize, Reader, XmlError, read_members, read_value, skip_element};

use crate::{output, types};

impl Ec2Deserialize for output::AcceptVpcPeeringConnectionResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "vpcPeeringConnection" => out.vpc_peering_connection = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::AccountAttribute {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "attributeName" => out.attribute_name = Some(read_value(reader)?),
                "attributeValueSet" => out.attribute_values = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::AccountAttributeValue {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "attributeValue" => out.attribute_value = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::Address {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "allocationId" => out.allocation_id = Some(read_value(reader)?),
                "associationId" => out.association_id = Some(read_value(reader)?),
                "domain" => out.domain = Some(read_value(reader)?),
                "instanceId" => out.instance_id = Some(read_value(reader)?),
                "networkInterfaceId" => out.network_interface_id = Some(read_value(reader)?),
                "networkInterfaceOwnerId" => out.network_interface_owner_id = Some(read_value(reader)?),
                "privateIpAddress" => out.private_ip_address = Some(read_value(reader)?),
                "publicIp" => out.public_ip = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::AllocateAddressResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "allocationId" => out.allocation_id = Some(read_value(reader)?),
                "domain" => out.domain = Some(read_value(reader)?),
                "publicIp" => out.public_ip = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::AssociateAddressResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "associationId" => out.association_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::AssociateRouteTableResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "associationId" => out.association_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::AttachNetworkInterfaceResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "attachmentId" => out.attachment_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::AttachVpnGatewayResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "attachment" => out.vpc_attachment = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::AttributeBooleanValue {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "value" => out.value = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::AttributeValue {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "value" => out.value = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::AvailabilityZone {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "messageSet" => out.messages = read_value(reader)?,
                "regionName" => out.region_name = Some(read_value(reader)?),
                "zoneName" => out.zone_name = Some(read_value(reader)?),
                "zoneState" => out.state = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::AvailabilityZoneMessage {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "message" => out.message = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::BlockDeviceMapping {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "deviceName" => out.device_name = Some(read_value(reader)?),
                "ebs" => out.ebs = Some(read_value(reader)?),
                "noDevice" => out.no_device = Some(read_value(reader)?),
                "virtualName" => out.virtual_name = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::BundleInstanceResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "bundleInstanceTask" => out.bundle_task = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::BundleTask {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "bundleId" => out.bundle_id = Some(read_value(reader)?),
                "error" => out.bundle_task_error = Some(read_value(reader)?),
                "instanceId" => out.instance_id = Some(read_value(reader)?),
                "progress" => out.progress = Some(read_value(reader)?),
                "startTime" => out.start_time = Some(read_value(reader)?),
                "state" => out.state = Some(read_value(reader)?),
                "storage" => out.storage = Some(read_value(reader)?),
                "updateTime" => out.update_time = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::BundleTaskError {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "code" => out.code = Some(read_value(reader)?),
                "message" => out.message = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::CancelBundleTaskResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "bundleInstanceTask" => out.bundle_task = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::CancelReservedInstancesListingResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "reservedInstancesListingsSet" => out.reserved_instances_listings = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::CancelSpotInstanceRequestsResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "spotInstanceRequestSet" => out.cancelled_spot_instance_requests = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::CancelledSpotInstanceRequest {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "spotInstanceRequestId" => out.spot_instance_request_id = Some(read_value(reader)?),
                "state" => out.state = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::ConfirmProductInstanceResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "ownerId" => out.owner_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::ConversionTask {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "conversionTaskId" => out.conversion_task_id = Some(read_value(reader)?),
                "expirationTime" => out.expiration_time = Some(read_value(reader)?),
                "importInstance" => out.import_instance = Some(read_value(reader)?),
                "importVolume" => out.import_volume = Some(read_value(reader)?),
                "state" => out.state = Some(read_value(reader)?),
                "statusMessage" => out.status_message = Some(read_value(reader)?),
                "tagSet" => out.tags = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::CopyImageResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "imageId" => out.image_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::CopySnapshotResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "snapshotId" => out.snapshot_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::CreateCustomerGatewayResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "customerGateway" => out.customer_gateway = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::CreateDhcpOptionsResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "dhcpOptions" => out.dhcp_options = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::CreateImageResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "imageId" => out.image_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::CreateInstanceExportTaskResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "exportTask" => out.export_task = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::CreateInternetGatewayResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "internetGateway" => out.internet_gateway = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::CreateNetworkAclResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "networkAcl" => out.network_acl = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::CreateNetworkInterfaceResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "networkInterface" => out.network_interface = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::CreateReservedInstancesListingResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "reservedInstancesListingsSet" => out.reserved_instances_listings = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::CreateRouteTableResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "routeTable" => out.route_table = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::CreateSecurityGroupResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "groupId" => out.group_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::CreateSpotDatafeedSubscriptionResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "spotDatafeedSubscription" => out.spot_datafeed_subscription = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::CreateSubnetResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "subnet" => out.subnet = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::CreateVolumePermission {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "group" => out.group = Some(read_value(reader)?),
                "userId" => out.user_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::CreateVpcPeeringConnectionResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "vpcPeeringConnection" => out.vpc_peering_connection = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::CreateVpcResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "vpc" => out.vpc = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::CreateVpnConnectionResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "vpnConnection" => out.vpn_connection = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::CreateVpnGatewayResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "vpnGateway" => out.vpn_gateway = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::CustomerGateway {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "bgpAsn" => out.bgp_asn = Some(read_value(reader)?),
                "customerGatewayId" => out.customer_gateway_id = Some(read_value(reader)?),
                "ipAddress" => out.ip_address = Some(read_value(reader)?),
                "state" => out.state = Some(read_value(reader)?),
                "tagSet" => out.tags = read_value(reader)?,
                "type" => out.r#type = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DeleteVpcPeeringConnectionResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "return" => out.r#return = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribeAccountAttributesResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "accountAttributeSet" => out.account_attributes = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribeAddressesResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "addressesSet" => out.addresses = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribeAvailabilityZonesResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "availabilityZoneInfo" => out.availability_zones = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribeBundleTasksResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "bundleInstanceTasksSet" => out.bundle_tasks = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribeConversionTasksResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "conversionTasks" => out.conversion_tasks = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribeCustomerGatewaysResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "customerGatewaySet" => out.customer_gateways = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribeDhcpOptionsResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "dhcpOptionsSet" => out.dhcp_options = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribeExportTasksResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "exportTaskSet" => out.export_tasks = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribeImagesResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "imagesSet" => out.images = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribeInstanceStatusResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "instanceStatusSet" => out.instance_statuses = read_value(reader)?,
                "nextToken" => out.next_token = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribeInstancesResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "nextToken" => out.next_token = Some(read_value(reader)?),
                "reservationSet" => out.reservations = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribeInternetGatewaysResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "internetGatewaySet" => out.internet_gateways = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribeKeyPairsResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "keySet" => out.key_pairs = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribeNetworkAclsResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "networkAclSet" => out.network_acls = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribeNetworkInterfaceAttributeResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "attachment" => out.attachment = Some(read_value(reader)?),
                "description" => out.description = Some(read_value(reader)?),
                "groupSet" => out.groups = read_value(reader)?,
                "networkInterfaceId" => out.network_interface_id = Some(read_value(reader)?),
                "sourceDestCheck" => out.source_dest_check = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribeNetworkInterfacesResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "networkInterfaceSet" => out.network_interfaces = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribePlacementGroupsResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "placementGroupSet" => out.placement_groups = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribeRegionsResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "regionInfo" => out.regions = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribeReservedInstancesListingsResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "reservedInstancesListingsSet" => out.reserved_instances_listings = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribeReservedInstancesModificationsResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "nextToken" => out.next_token = Some(read_value(reader)?),
                "reservedInstancesModificationsSet" => out.reserved_instances_modifications = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribeReservedInstancesOfferingsResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "nextToken" => out.next_token = Some(read_value(reader)?),
                "reservedInstancesOfferingsSet" => out.reserved_instances_offerings = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribeReservedInstancesResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "reservedInstancesSet" => out.reserved_instances = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribeRouteTablesResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "routeTableSet" => out.route_tables = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribeSecurityGroupsResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "securityGroupInfo" => out.security_groups = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribeSnapshotAttributeResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "createVolumePermission" => out.create_volume_permissions = read_value(reader)?,
                "productCodes" => out.product_codes = read_value(reader)?,
                "snapshotId" => out.snapshot_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribeSnapshotsResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "snapshotSet" => out.snapshots = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribeSpotDatafeedSubscriptionResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "spotDatafeedSubscription" => out.spot_datafeed_subscription = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribeSpotInstanceRequestsResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "spotInstanceRequestSet" => out.spot_instance_requests = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribeSpotPriceHistoryResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "nextToken" => out.next_token = Some(read_value(reader)?),
                "spotPriceHistorySet" => out.spot_price_history = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribeSubnetsResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "subnetSet" => out.subnets = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribeTagsResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "nextToken" => out.next_token = Some(read_value(reader)?),
                "tagSet" => out.tags = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribeVolumeAttributeResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "autoEnableIO" => out.auto_enable_io = Some(read_value(reader)?),
                "productCodes" => out.product_codes = read_value(reader)?,
                "volumeId" => out.volume_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribeVolumeStatusResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "nextToken" => out.next_token = Some(read_value(reader)?),
                "volumeStatusSet" => out.volume_statuses = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribeVolumesResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "nextToken" => out.next_token = Some(read_value(reader)?),
                "volumeSet" => out.volumes = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribeVpcAttributeResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "enableDnsHostnames" => out.enable_dns_hostnames = Some(read_value(reader)?),
                "enableDnsSupport" => out.enable_dns_support = Some(read_value(reader)?),
                "vpcId" => out.vpc_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribeVpcPeeringConnectionsResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "vpcPeeringConnectionSet" => out.vpc_peering_connections = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribeVpcsResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "vpcSet" => out.vpcs = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribeVpnConnectionsResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "vpnConnectionSet" => out.vpn_connections = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::DescribeVpnGatewaysResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "vpnGatewaySet" => out.vpn_gateways = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::DhcpConfiguration {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "key" => out.key = Some(read_value(reader)?),
                "valueSet" => out.values = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::DhcpOptions {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "dhcpConfigurationSet" => out.dhcp_configurations = read_value(reader)?,
                "dhcpOptionsId" => out.dhcp_options_id = Some(read_value(reader)?),
                "tagSet" => out.tags = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::DiskImageDescription {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "checksum" => out.checksum = Some(read_value(reader)?),
                "format" => out.format = Some(read_value(reader)?),
                "importManifestUrl" => out.import_manifest_url = Some(read_value(reader)?),
                "size" => out.size = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::DiskImageVolumeDescription {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "id" => out.id = Some(read_value(reader)?),
                "size" => out.size = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::EbsBlockDevice {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "deleteOnTermination" => out.delete_on_termination = Some(read_value(reader)?),
                "encrypted" => out.encrypted = Some(read_value(reader)?),
                "iops" => out.iops = Some(read_value(reader)?),
                "snapshotId" => out.snapshot_id = Some(read_value(reader)?),
                "volumeSize" => out.volume_size = Some(read_value(reader)?),
                "volumeType" => out.volume_type = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::EbsInstanceBlockDevice {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "attachTime" => out.attach_time = Some(read_value(reader)?),
                "deleteOnTermination" => out.delete_on_termination = Some(read_value(reader)?),
                "status" => out.status = Some(read_value(reader)?),
                "volumeId" => out.volume_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::ExportTask {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "description" => out.description = Some(read_value(reader)?),
                "exportTaskId" => out.export_task_id = Some(read_value(reader)?),
                "exportToS3" => out.export_to_s3_task = Some(read_value(reader)?),
                "instanceExport" => out.instance_export_details = Some(read_value(reader)?),
                "state" => out.state = Some(read_value(reader)?),
                "statusMessage" => out.status_message = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::ExportToS3Task {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "containerFormat" => out.container_format = Some(read_value(reader)?),
                "diskImageFormat" => out.disk_image_format = Some(read_value(reader)?),
                "s3Bucket" => out.s3_bucket = Some(read_value(reader)?),
                "s3Key" => out.s3_key = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::GetConsoleOutputResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "instanceId" => out.instance_id = Some(read_value(reader)?),
                "output" => out.output = Some(read_value(reader)?),
                "timestamp" => out.timestamp = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::GetPasswordDataResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "instanceId" => out.instance_id = Some(read_value(reader)?),
                "passwordData" => out.password_data = Some(read_value(reader)?),
                "timestamp" => out.timestamp = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::GroupIdentifier {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "groupId" => out.group_id = Some(read_value(reader)?),
                "groupName" => out.group_name = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::IamInstanceProfile {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "arn" => out.arn = Some(read_value(reader)?),
                "id" => out.id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::IamInstanceProfileSpecification {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "arn" => out.arn = Some(read_value(reader)?),
                "name" => out.name = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::IcmpTypeCode {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "code" => out.code = Some(read_value(reader)?),
                "type" => out.r#type = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::Image {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "architecture" => out.architecture = Some(read_value(reader)?),
                "blockDeviceMapping" => out.block_device_mappings = read_value(reader)?,
                "description" => out.description = Some(read_value(reader)?),
                "hypervisor" => out.hypervisor = Some(read_value(reader)?),
                "imageId" => out.image_id = Some(read_value(reader)?),
                "imageLocation" => out.image_location = Some(read_value(reader)?),
                "imageOwnerAlias" => out.image_owner_alias = Some(read_value(reader)?),
                "imageOwnerId" => out.owner_id = Some(read_value(reader)?),
                "imageState" => out.state = Some(read_value(reader)?),
                "imageType" => out.image_type = Some(read_value(reader)?),
                "isPublic" => out.public = Some(read_value(reader)?),
                "kernelId" => out.kernel_id = Some(read_value(reader)?),
                "name" => out.name = Some(read_value(reader)?),
                "platform" => out.platform = Some(read_value(reader)?),
                "productCodes" => out.product_codes = read_value(reader)?,
                "ramdiskId" => out.ramdisk_id = Some(read_value(reader)?),
                "rootDeviceName" => out.root_device_name = Some(read_value(reader)?),
                "rootDeviceType" => out.root_device_type = Some(read_value(reader)?),
                "sriovNetSupport" => out.sriov_net_support = Some(read_value(reader)?),
                "stateReason" => out.state_reason = Some(read_value(reader)?),
                "tagSet" => out.tags = read_value(reader)?,
                "virtualizationType" => out.virtualization_type = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::ImageAttribute {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "blockDeviceMapping" => out.block_device_mappings = read_value(reader)?,
                "description" => out.description = Some(read_value(reader)?),
                "imageId" => out.image_id = Some(read_value(reader)?),
                "kernel" => out.kernel_id = Some(read_value(reader)?),
                "launchPermission" => out.launch_permissions = read_value(reader)?,
                "productCodes" => out.product_codes = read_value(reader)?,
                "ramdisk" => out.ramdisk_id = Some(read_value(reader)?),
                "sriovNetSupport" => out.sriov_net_support = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::ImportInstanceResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "conversionTask" => out.conversion_task = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::ImportInstanceTaskDetails {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "description" => out.description = Some(read_value(reader)?),
                "instanceId" => out.instance_id = Some(read_value(reader)?),
                "platform" => out.platform = Some(read_value(reader)?),
                "volumes" => out.volumes = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::ImportInstanceVolumeDetailItem {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "availabilityZone" => out.availability_zone = Some(read_value(reader)?),
                "bytesConverted" => out.bytes_converted = Some(read_value(reader)?),
                "description" => out.description = Some(read_value(reader)?),
                "image" => out.image = Some(read_value(reader)?),
                "status" => out.status = Some(read_value(reader)?),
                "statusMessage" => out.status_message = Some(read_value(reader)?),
                "volume" => out.volume = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::ImportKeyPairResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "keyFingerprint" => out.key_fingerprint = Some(read_value(reader)?),
                "keyName" => out.key_name = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::ImportVolumeResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "conversionTask" => out.conversion_task = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::ImportVolumeTaskDetails {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "availabilityZone" => out.availability_zone = Some(read_value(reader)?),
                "bytesConverted" => out.bytes_converted = Some(read_value(reader)?),
                "description" => out.description = Some(read_value(reader)?),
                "image" => out.image = Some(read_value(reader)?),
                "volume" => out.volume = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::Instance {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "amiLaunchIndex" => out.ami_launch_index = Some(read_value(reader)?),
                "architecture" => out.architecture = Some(read_value(reader)?),
                "blockDeviceMapping" => out.block_device_mappings = read_value(reader)?,
                "clientToken" => out.client_token = Some(read_value(reader)?),
                "dnsName" => out.public_dns_name = Some(read_value(reader)?),
                "ebsOptimized" => out.ebs_optimized = Some(read_value(reader)?),
                "groupSet" => out.security_groups = read_value(reader)?,
                "hypervisor" => out.hypervisor = Some(read_value(reader)?),
                "iamInstanceProfile" => out.iam_instance_profile = Some(read_value(reader)?),
                "imageId" => out.image_id = Some(read_value(reader)?),
                "instanceId" => out.instance_id = Some(read_value(reader)?),
                "instanceLifecycle" => out.instance_lifecycle = Some(read_value(reader)?),
                "instanceState" => out.state = Some(read_value(reader)?),
                "instanceType" => out.instance_type = Some(read_value(reader)?),
                "ipAddress" => out.public_ip_address = Some(read_value(reader)?),
                "kernelId" => out.kernel_id = Some(read_value(reader)?),
                "keyName" => out.key_name = Some(read_value(reader)?),
                "launchTime" => out.launch_time = Some(read_value(reader)?),
                "monitoring" => out.monitoring = Some(read_value(reader)?),
                "networkInterfaceSet" => out.network_interfaces = read_value(reader)?,
                "placement" => out.placement = Some(read_value(reader)?),
                "platform" => out.platform = Some(read_value(reader)?),
                "privateDnsName" => out.private_dns_name = Some(read_value(reader)?),
                "privateIpAddress" => out.private_ip_address = Some(read_value(reader)?),
                "productCodes" => out.product_codes = read_value(reader)?,
                "ramdiskId" => out.ramdisk_id = Some(read_value(reader)?),
                "reason" => out.state_transition_reason = Some(read_value(reader)?),
                "rootDeviceName" => out.root_device_name = Some(read_value(reader)?),
                "rootDeviceType" => out.root_device_type = Some(read_value(reader)?),
                "sourceDestCheck" => out.source_dest_check = Some(read_value(reader)?),
                "spotInstanceRequestId" => out.spot_instance_request_id = Some(read_value(reader)?),
                "sriovNetSupport" => out.sriov_net_support = Some(read_value(reader)?),
                "stateReason" => out.state_reason = Some(read_value(reader)?),
                "subnetId" => out.subnet_id = Some(read_value(reader)?),
                "tagSet" => out.tags = read_value(reader)?,
                "virtualizationType" => out.virtualization_type = Some(read_value(reader)?),
                "vpcId" => out.vpc_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::InstanceAttribute {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "blockDeviceMapping" => out.block_device_mappings = read_value(reader)?,
                "disableApiTermination" => out.disable_api_termination = Some(read_value(reader)?),
                "ebsOptimized" => out.ebs_optimized = Some(read_value(reader)?),
                "groupSet" => out.groups = read_value(reader)?,
                "instanceId" => out.instance_id = Some(read_value(reader)?),
                "instanceInitiatedShutdownBehavior" => out.instance_initiated_shutdown_behavior = Some(read_value(reader)?),
                "instanceType" => out.instance_type = Some(read_value(reader)?),
                "kernel" => out.kernel_id = Some(read_value(reader)?),
                "productCodes" => out.product_codes = read_value(reader)?,
                "ramdisk" => out.ramdisk_id = Some(read_value(reader)?),
                "rootDeviceName" => out.root_device_name = Some(read_value(reader)?),
                "sourceDestCheck" => out.source_dest_check = Some(read_value(reader)?),
                "sriovNetSupport" => out.sriov_net_support = Some(read_value(reader)?),
                "userData" => out.user_data = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::InstanceBlockDeviceMapping {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "deviceName" => out.device_name = Some(read_value(reader)?),
                "ebs" => out.ebs = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::InstanceCount {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "instanceCount" => out.instance_count = Some(read_value(reader)?),
                "state" => out.state = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::InstanceExportDetails {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "instanceId" => out.instance_id = Some(read_value(reader)?),
                "targetEnvironment" => out.target_environment = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::InstanceMonitoring {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "instanceId" => out.instance_id = Some(read_value(reader)?),
                "monitoring" => out.monitoring = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::InstanceNetworkInterface {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "association" => out.association = Some(read_value(reader)?),
                "attachment" => out.attachment = Some(read_value(reader)?),
                "description" => out.description = Some(read_value(reader)?),
                "groupSet" => out.groups = read_value(reader)?,
                "macAddress" => out.mac_address = Some(read_value(reader)?),
                "networkInterfaceId" => out.network_interface_id = Some(read_value(reader)?),
                "ownerId" => out.owner_id = Some(read_value(reader)?),
                "privateDnsName" => out.private_dns_name = Some(read_value(reader)?),
                "privateIpAddress" => out.private_ip_address = Some(read_value(reader)?),
                "privateIpAddressesSet" => out.private_ip_addresses = read_value(reader)?,
                "sourceDestCheck" => out.source_dest_check = Some(read_value(reader)?),
                "status" => out.status = Some(read_value(reader)?),
                "subnetId" => out.subnet_id = Some(read_value(reader)?),
                "vpcId" => out.vpc_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::InstanceNetworkInterfaceAssociation {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "ipOwnerId" => out.ip_owner_id = Some(read_value(reader)?),
                "publicDnsName" => out.public_dns_name = Some(read_value(reader)?),
                "publicIp" => out.public_ip = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::InstanceNetworkInterfaceAttachment {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "attachTime" => out.attach_time = Some(read_value(reader)?),
                "attachmentId" => out.attachment_id = Some(read_value(reader)?),
                "deleteOnTermination" => out.delete_on_termination = Some(read_value(reader)?),
                "deviceIndex" => out.device_index = Some(read_value(reader)?),
                "status" => out.status = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::InstanceNetworkInterfaceSpecification {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "SecurityGroupId" => out.groups = read_value(reader)?,
                "associatePublicIpAddress" => out.associate_public_ip_address = Some(read_value(reader)?),
                "deleteOnTermination" => out.delete_on_termination = Some(read_value(reader)?),
                "description" => out.description = Some(read_value(reader)?),
                "deviceIndex" => out.device_index = Some(read_value(reader)?),
                "networkInterfaceId" => out.network_interface_id = Some(read_value(reader)?),
                "privateIpAddress" => out.private_ip_address = Some(read_value(reader)?),
                "privateIpAddressesSet" => out.private_ip_addresses = read_value(reader)?,
                "secondaryPrivateIpAddressCount" => out.secondary_private_ip_address_count = Some(read_value(reader)?),
                "subnetId" => out.subnet_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::InstancePrivateIpAddress {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "association" => out.association = Some(read_value(reader)?),
                "primary" => out.primary = Some(read_value(reader)?),
                "privateDnsName" => out.private_dns_name = Some(read_value(reader)?),
                "privateIpAddress" => out.private_ip_address = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::InstanceState {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "code" => out.code = Some(read_value(reader)?),
                "name" => out.name = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::InstanceStateChange {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "currentState" => out.current_state = Some(read_value(reader)?),
                "instanceId" => out.instance_id = Some(read_value(reader)?),
                "previousState" => out.previous_state = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::InstanceStatus {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "availabilityZone" => out.availability_zone = Some(read_value(reader)?),
                "eventsSet" => out.events = read_value(reader)?,
                "instanceId" => out.instance_id = Some(read_value(reader)?),
                "instanceState" => out.instance_state = Some(read_value(reader)?),
                "instanceStatus" => out.instance_status = Some(read_value(reader)?),
                "systemStatus" => out.system_status = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::InstanceStatusDetails {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "impairedSince" => out.impaired_since = Some(read_value(reader)?),
                "name" => out.name = Some(read_value(reader)?),
                "status" => out.status = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::InstanceStatusEvent {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "code" => out.code = Some(read_value(reader)?),
                "description" => out.description = Some(read_value(reader)?),
                "notAfter" => out.not_after = Some(read_value(reader)?),
                "notBefore" => out.not_before = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::InstanceStatusSummary {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "details" => out.details = read_value(reader)?,
                "status" => out.status = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::InternetGateway {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "attachmentSet" => out.attachments = read_value(reader)?,
                "internetGatewayId" => out.internet_gateway_id = Some(read_value(reader)?),
                "tagSet" => out.tags = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::InternetGatewayAttachment {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "state" => out.state = Some(read_value(reader)?),
                "vpcId" => out.vpc_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::IpPermission {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "fromPort" => out.from_port = Some(read_value(reader)?),
                "groups" => out.user_id_group_pairs = read_value(reader)?,
                "ipProtocol" => out.ip_protocol = Some(read_value(reader)?),
                "ipRanges" => out.ip_ranges = read_value(reader)?,
                "toPort" => out.to_port = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::IpRange {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "cidrIp" => out.cidr_ip = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::KeyPair {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "keyFingerprint" => out.key_fingerprint = Some(read_value(reader)?),
                "keyMaterial" => out.key_material = Some(read_value(reader)?),
                "keyName" => out.key_name = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::KeyPairInfo {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "keyFingerprint" => out.key_fingerprint = Some(read_value(reader)?),
                "keyName" => out.key_name = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::LaunchPermission {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "group" => out.group = Some(read_value(reader)?),
                "userId" => out.user_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::LaunchSpecification {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "addressingType" => out.addressing_type = Some(read_value(reader)?),
                "blockDeviceMapping" => out.block_device_mappings = read_value(reader)?,
                "ebsOptimized" => out.ebs_optimized = Some(read_value(reader)?),
                "groupSet" => out.security_groups = read_value(reader)?,
                "iamInstanceProfile" => out.iam_instance_profile = Some(read_value(reader)?),
                "imageId" => out.image_id = Some(read_value(reader)?),
                "instanceType" => out.instance_type = Some(read_value(reader)?),
                "kernelId" => out.kernel_id = Some(read_value(reader)?),
                "keyName" => out.key_name = Some(read_value(reader)?),
                "monitoring" => out.monitoring = Some(read_value(reader)?),
                "networkInterfaceSet" => out.network_interfaces = read_value(reader)?,
                "placement" => out.placement = Some(read_value(reader)?),
                "ramdiskId" => out.ramdisk_id = Some(read_value(reader)?),
                "subnetId" => out.subnet_id = Some(read_value(reader)?),
                "userData" => out.user_data = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::ModifyReservedInstancesResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "reservedInstancesModificationId" => out.reserved_instances_modification_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::MonitorInstancesResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "instancesSet" => out.instance_monitorings = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::Monitoring {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "state" => out.state = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::NetworkAcl {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "associationSet" => out.associations = read_value(reader)?,
                "default" => out.is_default = Some(read_value(reader)?),
                "entrySet" => out.entries = read_value(reader)?,
                "networkAclId" => out.network_acl_id = Some(read_value(reader)?),
                "tagSet" => out.tags = read_value(reader)?,
                "vpcId" => out.vpc_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::NetworkAclAssociation {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "networkAclAssociationId" => out.network_acl_association_id = Some(read_value(reader)?),
                "networkAclId" => out.network_acl_id = Some(read_value(reader)?),
                "subnetId" => out.subnet_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::NetworkAclEntry {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "cidrBlock" => out.cidr_block = Some(read_value(reader)?),
                "egress" => out.egress = Some(read_value(reader)?),
                "icmpTypeCode" => out.icmp_type_code = Some(read_value(reader)?),
                "portRange" => out.port_range = Some(read_value(reader)?),
                "protocol" => out.protocol = Some(read_value(reader)?),
                "ruleAction" => out.rule_action = Some(read_value(reader)?),
                "ruleNumber" => out.rule_number = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::NetworkInterface {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "association" => out.association = Some(read_value(reader)?),
                "attachment" => out.attachment = Some(read_value(reader)?),
                "availabilityZone" => out.availability_zone = Some(read_value(reader)?),
                "description" => out.description = Some(read_value(reader)?),
                "groupSet" => out.groups = read_value(reader)?,
                "macAddress" => out.mac_address = Some(read_value(reader)?),
                "networkInterfaceId" => out.network_interface_id = Some(read_value(reader)?),
                "ownerId" => out.owner_id = Some(read_value(reader)?),
                "privateDnsName" => out.private_dns_name = Some(read_value(reader)?),
                "privateIpAddress" => out.private_ip_address = Some(read_value(reader)?),
                "privateIpAddressesSet" => out.private_ip_addresses = read_value(reader)?,
                "requesterId" => out.requester_id = Some(read_value(reader)?),
                "requesterManaged" => out.requester_managed = Some(read_value(reader)?),
                "sourceDestCheck" => out.source_dest_check = Some(read_value(reader)?),
                "status" => out.status = Some(read_value(reader)?),
                "subnetId" => out.subnet_id = Some(read_value(reader)?),
                "tagSet" => out.tag_set = read_value(reader)?,
                "vpcId" => out.vpc_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::NetworkInterfaceAssociation {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "allocationId" => out.allocation_id = Some(read_value(reader)?),
                "associationId" => out.association_id = Some(read_value(reader)?),
                "ipOwnerId" => out.ip_owner_id = Some(read_value(reader)?),
                "publicDnsName" => out.public_dns_name = Some(read_value(reader)?),
                "publicIp" => out.public_ip = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::NetworkInterfaceAttachment {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "attachTime" => out.attach_time = Some(read_value(reader)?),
                "attachmentId" => out.attachment_id = Some(read_value(reader)?),
                "deleteOnTermination" => out.delete_on_termination = Some(read_value(reader)?),
                "deviceIndex" => out.device_index = Some(read_value(reader)?),
                "instanceId" => out.instance_id = Some(read_value(reader)?),
                "instanceOwnerId" => out.instance_owner_id = Some(read_value(reader)?),
                "status" => out.status = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::NetworkInterfacePrivateIpAddress {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "association" => out.association = Some(read_value(reader)?),
                "primary" => out.primary = Some(read_value(reader)?),
                "privateDnsName" => out.private_dns_name = Some(read_value(reader)?),
                "privateIpAddress" => out.private_ip_address = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::Placement {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "availabilityZone" => out.availability_zone = Some(read_value(reader)?),
                "groupName" => out.group_name = Some(read_value(reader)?),
                "tenancy" => out.tenancy = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::PlacementGroup {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "groupName" => out.group_name = Some(read_value(reader)?),
                "state" => out.state = Some(read_value(reader)?),
                "strategy" => out.strategy = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::PortRange {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "from" => out.from = Some(read_value(reader)?),
                "to" => out.to = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::PriceSchedule {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "active" => out.active = Some(read_value(reader)?),
                "currencyCode" => out.currency_code = Some(read_value(reader)?),
                "price" => out.price = Some(read_value(reader)?),
                "term" => out.term = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::PricingDetail {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "count" => out.count = Some(read_value(reader)?),
                "price" => out.price = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::PrivateIpAddressSpecification {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "primary" => out.primary = Some(read_value(reader)?),
                "privateIpAddress" => out.private_ip_address = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::ProductCode {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "productCode" => out.product_code_id = Some(read_value(reader)?),
                "type" => out.product_code_type = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::PropagatingVgw {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "gatewayId" => out.gateway_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::PurchaseReservedInstancesOfferingResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "reservedInstancesId" => out.reserved_instances_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::RecurringCharge {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "amount" => out.amount = Some(read_value(reader)?),
                "frequency" => out.frequency = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::Region {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "regionEndpoint" => out.endpoint = Some(read_value(reader)?),
                "regionName" => out.region_name = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::RegisterImageResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "imageId" => out.image_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::RejectVpcPeeringConnectionResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "return" => out.r#return = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::ReplaceNetworkAclAssociationResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "newAssociationId" => out.new_association_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::ReplaceRouteTableAssociationResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "newAssociationId" => out.new_association_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::RequestSpotInstancesResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "spotInstanceRequestSet" => out.spot_instance_requests = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::Reservation {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "groupSet" => out.groups = read_value(reader)?,
                "instancesSet" => out.instances = read_value(reader)?,
                "ownerId" => out.owner_id = Some(read_value(reader)?),
                "requesterId" => out.requester_id = Some(read_value(reader)?),
                "reservationId" => out.reservation_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::ReservedInstances {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "availabilityZone" => out.availability_zone = Some(read_value(reader)?),
                "currencyCode" => out.currency_code = Some(read_value(reader)?),
                "duration" => out.duration = Some(read_value(reader)?),
                "end" => out.end = Some(read_value(reader)?),
                "fixedPrice" => out.fixed_price = Some(read_value(reader)?),
                "instanceCount" => out.instance_count = Some(read_value(reader)?),
                "instanceTenancy" => out.instance_tenancy = Some(read_value(reader)?),
                "instanceType" => out.instance_type = Some(read_value(reader)?),
                "offeringType" => out.offering_type = Some(read_value(reader)?),
                "productDescription" => out.product_description = Some(read_value(reader)?),
                "recurringCharges" => out.recurring_charges = read_value(reader)?,
                "reservedInstancesId" => out.reserved_instances_id = Some(read_value(reader)?),
                "start" => out.start = Some(read_value(reader)?),
                "state" => out.state = Some(read_value(reader)?),
                "tagSet" => out.tags = read_value(reader)?,
                "usagePrice" => out.usage_price = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::ReservedInstancesConfiguration {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "availabilityZone" => out.availability_zone = Some(read_value(reader)?),
                "instanceCount" => out.instance_count = Some(read_value(reader)?),
                "instanceType" => out.instance_type = Some(read_value(reader)?),
                "platform" => out.platform = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::ReservedInstancesId {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "reservedInstancesId" => out.reserved_instances_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::ReservedInstancesListing {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "clientToken" => out.client_token = Some(read_value(reader)?),
                "createDate" => out.create_date = Some(read_value(reader)?),
                "instanceCounts" => out.instance_counts = read_value(reader)?,
                "priceSchedules" => out.price_schedules = read_value(reader)?,
                "reservedInstancesId" => out.reserved_instances_id = Some(read_value(reader)?),
                "reservedInstancesListingId" => out.reserved_instances_listing_id = Some(read_value(reader)?),
                "status" => out.status = Some(read_value(reader)?),
                "statusMessage" => out.status_message = Some(read_value(reader)?),
                "tagSet" => out.tags = read_value(reader)?,
                "updateDate" => out.update_date = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::ReservedInstancesModification {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "clientToken" => out.client_token = Some(read_value(reader)?),
                "createDate" => out.create_date = Some(read_value(reader)?),
                "effectiveDate" => out.effective_date = Some(read_value(reader)?),
                "modificationResultSet" => out.modification_results = read_value(reader)?,
                "reservedInstancesModificationId" => out.reserved_instances_modification_id = Some(read_value(reader)?),
                "reservedInstancesSet" => out.reserved_instances_ids = read_value(reader)?,
                "status" => out.status = Some(read_value(reader)?),
                "statusMessage" => out.status_message = Some(read_value(reader)?),
                "updateDate" => out.update_date = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::ReservedInstancesModificationResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "reservedInstancesId" => out.reserved_instances_id = Some(read_value(reader)?),
                "targetConfiguration" => out.target_configuration = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::ReservedInstancesOffering {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "availabilityZone" => out.availability_zone = Some(read_value(reader)?),
                "currencyCode" => out.currency_code = Some(read_value(reader)?),
                "duration" => out.duration = Some(read_value(reader)?),
                "fixedPrice" => out.fixed_price = Some(read_value(reader)?),
                "instanceTenancy" => out.instance_tenancy = Some(read_value(reader)?),
                "instanceType" => out.instance_type = Some(read_value(reader)?),
                "marketplace" => out.marketplace = Some(read_value(reader)?),
                "offeringType" => out.offering_type = Some(read_value(reader)?),
                "pricingDetailsSet" => out.pricing_details = read_value(reader)?,
                "productDescription" => out.product_description = Some(read_value(reader)?),
                "recurringCharges" => out.recurring_charges = read_value(reader)?,
                "reservedInstancesOfferingId" => out.reserved_instances_offering_id = Some(read_value(reader)?),
                "usagePrice" => out.usage_price = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::Route {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "destinationCidrBlock" => out.destination_cidr_block = Some(read_value(reader)?),
                "gatewayId" => out.gateway_id = Some(read_value(reader)?),
                "instanceId" => out.instance_id = Some(read_value(reader)?),
                "instanceOwnerId" => out.instance_owner_id = Some(read_value(reader)?),
                "networkInterfaceId" => out.network_interface_id = Some(read_value(reader)?),
                "origin" => out.origin = Some(read_value(reader)?),
                "state" => out.state = Some(read_value(reader)?),
                "vpcPeeringConnectionId" => out.vpc_peering_connection_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::RouteTable {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "associationSet" => out.associations = read_value(reader)?,
                "propagatingVgwSet" => out.propagating_vgws = read_value(reader)?,
                "routeSet" => out.routes = read_value(reader)?,
                "routeTableId" => out.route_table_id = Some(read_value(reader)?),
                "tagSet" => out.tags = read_value(reader)?,
                "vpcId" => out.vpc_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::RouteTableAssociation {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "main" => out.main = Some(read_value(reader)?),
                "routeTableAssociationId" => out.route_table_association_id = Some(read_value(reader)?),
                "routeTableId" => out.route_table_id = Some(read_value(reader)?),
                "subnetId" => out.subnet_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::RunInstancesMonitoringEnabled {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "enabled" => out.enabled = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::S3Storage {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "AWSAccessKeyId" => out.aws_access_key_id = Some(read_value(reader)?),
                "bucket" => out.bucket = Some(read_value(reader)?),
                "prefix" => out.prefix = Some(read_value(reader)?),
                "uploadPolicy" => out.upload_policy = Some(read_value(reader)?),
                "uploadPolicySignature" => out.upload_policy_signature = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::SecurityGroup {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "groupDescription" => out.description = Some(read_value(reader)?),
                "groupId" => out.group_id = Some(read_value(reader)?),
                "groupName" => out.group_name = Some(read_value(reader)?),
                "ipPermissions" => out.ip_permissions = read_value(reader)?,
                "ipPermissionsEgress" => out.ip_permissions_egress = read_value(reader)?,
                "ownerId" => out.owner_id = Some(read_value(reader)?),
                "tagSet" => out.tags = read_value(reader)?,
                "vpcId" => out.vpc_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::Snapshot {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "description" => out.description = Some(read_value(reader)?),
                "encrypted" => out.encrypted = Some(read_value(reader)?),
                "kmsKeyId" => out.kms_key_id = Some(read_value(reader)?),
                "ownerAlias" => out.owner_alias = Some(read_value(reader)?),
                "ownerId" => out.owner_id = Some(read_value(reader)?),
                "progress" => out.progress = Some(read_value(reader)?),
                "snapshotId" => out.snapshot_id = Some(read_value(reader)?),
                "startTime" => out.start_time = Some(read_value(reader)?),
                "status" => out.state = Some(read_value(reader)?),
                "tagSet" => out.tags = read_value(reader)?,
                "volumeId" => out.volume_id = Some(read_value(reader)?),
                "volumeSize" => out.volume_size = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::SpotDatafeedSubscription {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "bucket" => out.bucket = Some(read_value(reader)?),
                "fault" => out.fault = Some(read_value(reader)?),
                "ownerId" => out.owner_id = Some(read_value(reader)?),
                "prefix" => out.prefix = Some(read_value(reader)?),
                "state" => out.state = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::SpotInstanceRequest {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "availabilityZoneGroup" => out.availability_zone_group = Some(read_value(reader)?),
                "createTime" => out.create_time = Some(read_value(reader)?),
                "fault" => out.fault = Some(read_value(reader)?),
                "instanceId" => out.instance_id = Some(read_value(reader)?),
                "launchGroup" => out.launch_group = Some(read_value(reader)?),
                "launchSpecification" => out.launch_specification = Some(read_value(reader)?),
                "launchedAvailabilityZone" => out.launched_availability_zone = Some(read_value(reader)?),
                "productDescription" => out.product_description = Some(read_value(reader)?),
                "spotInstanceRequestId" => out.spot_instance_request_id = Some(read_value(reader)?),
                "spotPrice" => out.spot_price = Some(read_value(reader)?),
                "state" => out.state = Some(read_value(reader)?),
                "status" => out.status = Some(read_value(reader)?),
                "tagSet" => out.tags = read_value(reader)?,
                "type" => out.r#type = Some(read_value(reader)?),
                "validFrom" => out.valid_from = Some(read_value(reader)?),
                "validUntil" => out.valid_until = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::SpotInstanceStateFault {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "code" => out.code = Some(read_value(reader)?),
                "message" => out.message = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::SpotInstanceStatus {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "code" => out.code = Some(read_value(reader)?),
                "message" => out.message = Some(read_value(reader)?),
                "updateTime" => out.update_time = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::SpotPlacement {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "availabilityZone" => out.availability_zone = Some(read_value(reader)?),
                "groupName" => out.group_name = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::SpotPrice {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "availabilityZone" => out.availability_zone = Some(read_value(reader)?),
                "instanceType" => out.instance_type = Some(read_value(reader)?),
                "productDescription" => out.product_description = Some(read_value(reader)?),
                "spotPrice" => out.spot_price = Some(read_value(reader)?),
                "timestamp" => out.timestamp = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::StartInstancesResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "instancesSet" => out.starting_instances = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::StateReason {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "code" => out.code = Some(read_value(reader)?),
                "message" => out.message = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::StopInstancesResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "instancesSet" => out.stopping_instances = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::Storage {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "S3" => out.s3 = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::Subnet {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "availabilityZone" => out.availability_zone = Some(read_value(reader)?),
                "availableIpAddressCount" => out.available_ip_address_count = Some(read_value(reader)?),
                "cidrBlock" => out.cidr_block = Some(read_value(reader)?),
                "defaultForAz" => out.default_for_az = Some(read_value(reader)?),
                "mapPublicIpOnLaunch" => out.map_public_ip_on_launch = Some(read_value(reader)?),
                "state" => out.state = Some(read_value(reader)?),
                "subnetId" => out.subnet_id = Some(read_value(reader)?),
                "tagSet" => out.tags = read_value(reader)?,
                "vpcId" => out.vpc_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::Tag {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "key" => out.key = Some(read_value(reader)?),
                "value" => out.value = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::TagDescription {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "key" => out.key = Some(read_value(reader)?),
                "resourceId" => out.resource_id = Some(read_value(reader)?),
                "resourceType" => out.resource_type = Some(read_value(reader)?),
                "value" => out.value = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::TerminateInstancesResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "instancesSet" => out.terminating_instances = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for output::UnmonitorInstancesResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "instancesSet" => out.instance_monitorings = read_value(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::UserIdGroupPair {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "groupId" => out.group_id = Some(read_value(reader)?),
                "groupName" => out.group_name = Some(read_value(reader)?),
                "userId" => out.user_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::VgwTelemetry {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "acceptedRouteCount" => out.accepted_route_count = Some(read_value(reader)?),
                "lastStatusChange" => out.last_status_change = Some(read_value(reader)?),
                "outsideIpAddress" => out.outside_ip_address = Some(read_value(reader)?),
                "status" => out.status = Some(read_value(reader)?),
                "statusMessage" => out.status_message = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::Volume {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "attachmentSet" => out.attachments = read_value(reader)?,
                "availabilityZone" => out.availability_zone = Some(read_value(reader)?),
                "createTime" => out.create_time = Some(read_value(reader)?),
                "encrypted" => out.encrypted = Some(read_value(reader)?),
                "iops" => out.iops = Some(read_value(reader)?),
                "kmsKeyId" => out.kms_key_id = Some(read_value(reader)?),
                "size" => out.size = Some(read_value(reader)?),
                "snapshotId" => out.snapshot_id = Some(read_value(reader)?),
                "status" => out.state = Some(read_value(reader)?),
                "tagSet" => out.tags = read_value(reader)?,
                "volumeId" => out.volume_id = Some(read_value(reader)?),
                "volumeType" => out.volume_type = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::VolumeAttachment {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "attachTime" => out.attach_time = Some(read_value(reader)?),
                "deleteOnTermination" => out.delete_on_termination = Some(read_value(reader)?),
                "device" => out.device = Some(read_value(reader)?),
                "instanceId" => out.instance_id = Some(read_value(reader)?),
                "status" => out.state = Some(read_value(reader)?),
                "volumeId" => out.volume_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::VolumeStatusAction {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "code" => out.code = Some(read_value(reader)?),
                "description" => out.description = Some(read_value(reader)?),
                "eventId" => out.event_id = Some(read_value(reader)?),
                "eventType" => out.event_type = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::VolumeStatusDetails {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "name" => out.name = Some(read_value(reader)?),
                "status" => out.status = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::VolumeStatusEvent {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "description" => out.description = Some(read_value(reader)?),
                "eventId" => out.event_id = Some(read_value(reader)?),
                "eventType" => out.event_type = Some(read_value(reader)?),
                "notAfter" => out.not_after = Some(read_value(reader)?),
                "notBefore" => out.not_before = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::VolumeStatusInfo {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "details" => out.details = read_value(reader)?,
                "status" => out.status = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::VolumeStatusItem {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "actionsSet" => out.actions = read_value(reader)?,
                "availabilityZone" => out.availability_zone = Some(read_value(reader)?),
                "eventsSet" => out.events = read_value(reader)?,
                "volumeId" => out.volume_id = Some(read_value(reader)?),
                "volumeStatus" => out.volume_status = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::Vpc {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "cidrBlock" => out.cidr_block = Some(read_value(reader)?),
                "dhcpOptionsId" => out.dhcp_options_id = Some(read_value(reader)?),
                "instanceTenancy" => out.instance_tenancy = Some(read_value(reader)?),
                "isDefault" => out.is_default = Some(read_value(reader)?),
                "state" => out.state = Some(read_value(reader)?),
                "tagSet" => out.tags = read_value(reader)?,
                "vpcId" => out.vpc_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::VpcAttachment {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "state" => out.state = Some(read_value(reader)?),
                "vpcId" => out.vpc_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::VpcPeeringConnection {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "accepterVpcInfo" => out.accepter_vpc_info = Some(read_value(reader)?),
                "expirationTime" => out.expiration_time = Some(read_value(reader)?),
                "requesterVpcInfo" => out.requester_vpc_info = Some(read_value(reader)?),
                "status" => out.status = Some(read_value(reader)?),
                "tagSet" => out.tags = read_value(reader)?,
                "vpcPeeringConnectionId" => out.vpc_peering_connection_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::VpcPeeringConnectionStateReason {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "code" => out.code = Some(read_value(reader)?),
                "message" => out.message = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::VpcPeeringConnectionVpcInfo {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "cidrBlock" => out.cidr_block = Some(read_value(reader)?),
                "ownerId" => out.owner_id = Some(read_value(reader)?),
                "vpcId" => out.vpc_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::VpnConnection {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "customerGatewayConfiguration" => out.customer_gateway_configuration = Some(read_value(reader)?),
                "customerGatewayId" => out.customer_gateway_id = Some(read_value(reader)?),
                "options" => out.options = Some(read_value(reader)?),
                "routes" => out.routes = read_value(reader)?,
                "state" => out.state = Some(read_value(reader)?),
                "tagSet" => out.tags = read_value(reader)?,
                "type" => out.r#type = Some(read_value(reader)?),
                "vgwTelemetry" => out.vgw_telemetry = read_value(reader)?,
                "vpnConnectionId" => out.vpn_connection_id = Some(read_value(reader)?),
                "vpnGatewayId" => out.vpn_gateway_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::VpnConnectionOptions {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "staticRoutesOnly" => out.static_routes_only = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::VpnGateway {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "attachments" => out.vpc_attachments = read_value(reader)?,
                "availabilityZone" => out.availability_zone = Some(read_value(reader)?),
                "state" => out.state = Some(read_value(reader)?),
                "tagSet" => out.tags = read_value(reader)?,
                "type" => out.r#type = Some(read_value(reader)?),
                "vpnGatewayId" => out.vpn_gateway_id = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for types::VpnStaticRoute {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "destinationCidrBlock" => out.destination_cidr_block = Some(read_value(reader)?),
                "source" => out.source = Some(read_value(reader)?),
                "state" => out.state = Some(read_value(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}
