mod system_property;
